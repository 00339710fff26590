//! Vertical business-flow layout.
//!
//! Nodes run top to bottom along one vertical axis:
//!
//! ```text
//!            [Start]
//!               │
//!           [Process]
//!               │
//!           <Decision>
//!          ╱          ╲
//!      [Yes leaf]  [No leaf]
//!          ╲          ╱
//!             [End]
//! ```
//!
//! Processes are chained in input order. Each decision hangs below the
//! previous node with its affirmative branch to the left and its negative
//! branch to the right; every branch leaf then fans into the end node.

use indexmap::IndexMap;
use log::debug;

use drawflow_core::{
    document::{CellId, DiagramDocument, EdgeStyle, VertexStyle},
    graph::{BusinessFlow, NodeKind},
};

use super::{centred_on, size_for};
use crate::config::BusinessLayoutConfig;

/// Lays out `flow` into `document`.
///
/// An empty flow adds nothing, not even the start and end nodes.
pub fn layout(flow: &BusinessFlow, config: &BusinessLayoutConfig, document: &mut DiagramDocument) {
    if flow.is_empty() {
        debug!("Empty business flow, nothing to lay out");
        return;
    }

    let language = flow.language();
    let axis = config.axis();
    let step = config.step();
    let mut y = config.anchor().y();

    let start = document.add_node(
        language.start_label(),
        centred_on(axis, y, config.terminal_size()),
        NodeKind::Start,
    );
    y += step;

    // Synthetic start and end nodes are deliberately absent from this map.
    let mut placed: IndexMap<&str, CellId> = IndexMap::new();
    let mut previous = start;

    for process in flow.processes() {
        let id = match placed.get(process.name()) {
            Some(&id) => id,
            None => {
                let size = size_for(
                    process.kind(),
                    config.terminal_size(),
                    config.decision_size(),
                    config.process_size(),
                );
                let id =
                    document.add_node(process.name(), centred_on(axis, y, size), process.kind());
                placed.insert(process.name(), id);
                y += step;
                id
            }
        };
        if id != previous {
            document.add_edge(previous, id, "", EdgeStyle::Solid);
        }
        previous = id;
    }

    let mut leaves: Vec<CellId> = Vec::new();
    for decision in flow.decisions() {
        let decision_id = match placed.get(decision.name()) {
            Some(&id) => id,
            None => {
                let id = document.add_node(
                    decision.name(),
                    centred_on(axis, y, config.decision_size()),
                    NodeKind::Decision,
                );
                placed.insert(decision.name(), id);
                id
            }
        };
        if decision_id != previous {
            document.add_edge(previous, decision_id, "", EdgeStyle::Solid);
        }

        let branch_y = y + step;
        let branches = [
            (
                decision.true_branch(),
                -config.branch_offset(),
                language.affirmative(),
            ),
            (
                decision.false_branch(),
                config.branch_offset(),
                language.negative(),
            ),
        ];
        for (target, offset, marker) in branches {
            let Some(target) = target else {
                continue;
            };
            let id = match placed.get(target) {
                Some(&id) => id,
                None => {
                    let id = document.add_node(
                        target,
                        centred_on(axis + offset, branch_y, config.branch_size()),
                        VertexStyle::Process,
                    );
                    placed.insert(target, id);
                    leaves.push(id);
                    id
                }
            };
            document.add_edge(decision_id, id, marker, EdgeStyle::Solid);
        }

        previous = decision_id;
        // Advances even without branches to keep decision rows evenly spaced.
        y += 2 * step;
    }

    let end = document.add_node(
        language.end_label(),
        centred_on(axis, y, config.terminal_size()),
        NodeKind::End,
    );
    if leaves.is_empty() {
        document.add_edge(previous, end, "", EdgeStyle::Solid);
    } else {
        for leaf in &leaves {
            document.add_edge(*leaf, end, "", EdgeStyle::Solid);
        }
    }

    debug!(
        nodes = placed.len() + 2,
        leaves = leaves.len(),
        cells = document.cells().len();
        "Business flow laid out"
    );
}
