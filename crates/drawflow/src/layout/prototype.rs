//! Prototype wireframe layout.
//!
//! One swimlane titled in the prototype's language encloses a grid of
//! screen containers. Consecutive screens are linked by dashed edges in
//! navigation order. The swimlane is added first so it sits beneath the
//! containers when drawn.

use log::debug;

use drawflow_core::{
    document::{CellId, DiagramDocument, EdgeStyle},
    geometry::{Bounds, Size},
    graph::Prototype,
};

use crate::config::PrototypeLayoutConfig;

/// Lays out `prototype` into `document`.
///
/// A prototype without screens adds nothing.
pub fn layout(
    prototype: &Prototype,
    config: &PrototypeLayoutConfig,
    document: &mut DiagramDocument,
) {
    let count = prototype.screen_count();
    if count == 0 {
        debug!("Prototype has no screens, nothing to lay out");
        return;
    }

    let columns = config.columns();
    let container = config.container_size();
    let first = config
        .origin()
        .offset(config.padding(), config.title_height() + config.padding());
    let slots: Vec<Bounds> = (0..count)
        .map(|index| {
            let (row, column) = ((index / columns) as i32, (index % columns) as i32);
            first
                .offset(column * config.column_spacing(), row * config.row_spacing())
                .to_bounds(container)
        })
        .collect();

    // The swimlane wraps the grid with padding and a title band on top.
    let Some(grid) = slots.iter().copied().reduce(|grid, slot| grid.merge(&slot)) else {
        return;
    };
    let lane = Bounds::new(
        config.origin(),
        Size::new(
            grid.size().width() + 2 * config.padding(),
            grid.size().height() + config.title_height() + 2 * config.padding(),
        ),
    );
    document.add_swimlane(prototype.language().prototype_title(), lane);

    let mut previous: Option<CellId> = None;
    for (screen, slot) in prototype.screens().iter().zip(slots) {
        let id = document.add_container(screen.name(), slot);
        if let Some(previous) = previous {
            document.add_edge(previous, id, "", EdgeStyle::Dashed);
        }
        previous = Some(id);
    }

    debug!(screens = count, lane:? = lane; "Prototype laid out");
}
