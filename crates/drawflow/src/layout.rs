//! Layout engines.
//!
//! Each engine assigns canvas coordinates to one graph kind and issues the
//! corresponding node and edge calls on a [`DiagramDocument`] in a fixed
//! order, so the same graph always yields the same document.
//!
//! - [`business`] - Vertical flow with side branches and fan-in to the end node
//! - [`ui`] - Row-major grid, edges resolved by node name
//! - [`prototype`] - Screen containers on a grid inside one swimlane
//!
//! [`DiagramDocument`]: drawflow_core::document::DiagramDocument

pub mod business;
pub mod prototype;
pub mod ui;

use drawflow_core::{
    geometry::{Bounds, Point, Size},
    graph::NodeKind,
};

#[cfg(test)]
use drawflow_core::document::VisualCell;

/// Returns bounds of `size` whose horizontal centre lies on `axis_x`.
fn centred_on(axis_x: i32, y: i32, size: Size) -> Bounds {
    Point::new(axis_x - size.width() / 2, y).to_bounds(size)
}

/// Picks a node size by kind from the three size classes every engine uses.
fn size_for(kind: NodeKind, terminal: Size, decision: Size, regular: Size) -> Size {
    match kind {
        NodeKind::Start | NodeKind::End => terminal,
        NodeKind::Decision => decision,
        NodeKind::Process | NodeKind::Screen => regular,
    }
}

/// Returns the first pair of cells whose bounds share interior area.
#[cfg(test)]
fn first_overlap<'a>(
    cells: impl IntoIterator<Item = &'a VisualCell>,
) -> Option<(&'a VisualCell, &'a VisualCell)> {
    let placed: Vec<(&VisualCell, Bounds)> = cells
        .into_iter()
        .filter_map(|cell| Some((cell, cell.bounds()?)))
        .collect();
    placed.iter().enumerate().find_map(|(i, (a, a_bounds))| {
        placed[i + 1..]
            .iter()
            .find(|(_, b_bounds)| a_bounds.intersects(b_bounds))
            .map(|(b, _)| (*a, *b))
    })
}
