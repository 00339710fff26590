//! UI-flow assembly from `NODE:`, `EDGE:` and `DECISION:` matches.

use indexmap::IndexMap;
use log::{debug, info};

use drawflow_core::graph::{GraphEdge, GraphNode, NodeKind, UiFlow};

use crate::{
    ParseConfig, Parsed,
    error::DiagnosticCollector,
    rules::{self, annotation::AnnotationKey},
    span::Span,
    warnings::{duplicate, no_branches, resolve_kind},
};

/// Parses a UI navigation flow.
///
/// Node order is: explicit `NODE:` declarations, then for each decision its
/// own node (unless already declared) followed by any branch targets not yet
/// known, which become screens. Explicit `EDGE:` edges come first, followed
/// by the labelled edges each decision implies. Edges to undeclared names
/// are kept; the layout stage drops them.
pub(crate) fn parse(text: &str, config: &ParseConfig) -> Parsed<UiFlow> {
    let language = crate::language::resolve(config.language(), text);
    let mut collector = DiagnosticCollector::new();

    let mut declared: IndexMap<String, Span> = IndexMap::new();
    let mut nodes = Vec::new();
    for raw in rules::node::extract(text) {
        if let Some(first) = declared.get(&raw.name) {
            collector.emit(duplicate("node", &raw.name, raw.span, *first));
            continue;
        }
        declared.insert(raw.name.clone(), raw.span);

        let kind = resolve_kind(
            raw.annotations.get(AnnotationKey::Type),
            NodeKind::Screen,
            raw.span,
            &mut collector,
        );
        let mut node = GraphNode::new(raw.name, kind);
        if let Some(description) = raw.annotations.get(AnnotationKey::Description) {
            node = node.with_metadata(description);
        }
        nodes.push(node);
    }

    let mut edges: Vec<GraphEdge> = rules::edge::extract(text)
        .into_iter()
        .map(|raw| GraphEdge::new(raw.from, raw.to).with_label(raw.label))
        .collect();

    let mut seen_decisions: IndexMap<String, Span> = IndexMap::new();
    let mut branch_edges = Vec::new();
    for raw in rules::decision::extract(text) {
        if let Some(first) = seen_decisions.get(&raw.name) {
            collector.emit(duplicate("decision", &raw.name, raw.span, *first));
            continue;
        }
        seen_decisions.insert(raw.name.clone(), raw.span);

        if raw.true_branch.is_none() && raw.false_branch.is_none() {
            collector.emit(no_branches(&raw.name, raw.span, language));
        }

        if !declared.contains_key(&raw.name) {
            declared.insert(raw.name.clone(), raw.span);
            let mut node = GraphNode::new(raw.name.clone(), NodeKind::Decision);
            if let Some(condition) = raw.annotations.get(AnnotationKey::Condition) {
                node = node.with_metadata(condition);
            }
            nodes.push(node);
        }

        let branches = [
            (raw.true_branch, language.affirmative()),
            (raw.false_branch, language.negative()),
        ];
        for (target, marker) in branches {
            let Some(target) = target else {
                continue;
            };
            if !declared.contains_key(&target) {
                debug!(name = target.as_str(); "Creating screen for branch target");
                declared.insert(target.clone(), raw.span);
                nodes.push(GraphNode::new(target.clone(), NodeKind::Screen));
            }
            branch_edges.push(GraphEdge::new(raw.name.clone(), target).with_label(marker));
        }
    }
    edges.extend(branch_edges);

    info!(
        language:% = language,
        nodes = nodes.len(),
        edges = edges.len();
        "Parsed UI flow"
    );
    Parsed::new(UiFlow::new(language, nodes, edges), collector.finish())
}
