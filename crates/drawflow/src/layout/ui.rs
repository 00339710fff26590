//! Row-major grid layout for UI flows.
//!
//! Nodes fill the grid left to right, top to bottom, in input order;
//! edge topology plays no part in placement. Each node is centred inside
//! its grid slot, whose size is the configured screen size.

use indexmap::IndexMap;
use log::debug;

use drawflow_core::{
    document::{CellId, DiagramDocument, EdgeStyle},
    geometry::Point,
    graph::UiFlow,
};

use super::size_for;
use crate::config::UiLayoutConfig;

/// Lays out `flow` into `document`.
///
/// Edges whose endpoints name no placed node are dropped.
pub fn layout(flow: &UiFlow, config: &UiLayoutConfig, document: &mut DiagramDocument) {
    let columns = config.columns();
    let slot = config.screen_size();
    let mut placed: IndexMap<&str, CellId> = IndexMap::new();

    for node in flow.nodes() {
        if placed.contains_key(node.name()) {
            continue;
        }

        let index = placed.len();
        let (row, column) = (index / columns, index % columns);
        let slot_origin = config.origin().offset(
            column as i32 * config.column_spacing(),
            row as i32 * config.row_spacing(),
        );

        let size = size_for(
            node.kind(),
            config.terminal_size(),
            config.decision_size(),
            slot,
        );
        let origin = Point::new(
            slot_origin.x() + (slot.width() - size.width()) / 2,
            slot_origin.y() + (slot.height() - size.height()) / 2,
        );

        let id = document.add_node(node.name(), origin.to_bounds(size), node.kind());
        placed.insert(node.name(), id);
    }

    let mut dropped = 0usize;
    for edge in flow.edges() {
        let (Some(&source), Some(&target)) =
            (placed.get(edge.source()), placed.get(edge.target()))
        else {
            debug!(from = edge.source(), to = edge.target(); "Dropping edge with unknown endpoint");
            dropped += 1;
            continue;
        };
        document.add_edge(source, target, edge.label(), EdgeStyle::Solid);
    }

    debug!(
        nodes = placed.len(),
        edges = flow.edges().len() - dropped,
        dropped = dropped;
        "UI flow laid out"
    );
}
