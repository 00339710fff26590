//! Business-flow assembly from `PROCESS:` and `DECISION:` matches.

use indexmap::IndexMap;
use log::{debug, info};

use drawflow_core::{
    graph::{BusinessFlow, Decision, GraphNode, NodeKind},
    language::Language,
};

use crate::{
    ParseConfig, Parsed,
    error::{Diagnostic, DiagnosticCollector, WarningCode},
    rules::{self, annotation::AnnotationKey},
    span::Span,
    warnings::{duplicate, no_branches, resolve_kind},
};

/// Parses a business process description.
///
/// Processes and decisions are kept in written order. A repeated name keeps
/// its first definition and reports `W002`. When neither processes nor
/// decisions are found the localized fallback skeleton is returned with a
/// `W001` warning, so the result is never empty.
pub(crate) fn parse(text: &str, config: &ParseConfig) -> Parsed<BusinessFlow> {
    let language = crate::language::resolve(config.language(), text);
    let mut collector = DiagnosticCollector::new();

    let mut seen: IndexMap<String, Span> = IndexMap::new();
    let mut processes = Vec::new();
    for raw in rules::process::extract(text) {
        if let Some(first) = seen.get(&raw.name) {
            collector.emit(duplicate("process", &raw.name, raw.span, *first));
            continue;
        }
        seen.insert(raw.name.clone(), raw.span);

        let kind = resolve_kind(
            raw.annotations.get(AnnotationKey::Type),
            NodeKind::Process,
            raw.span,
            &mut collector,
        );
        let actor = raw
            .annotations
            .get(AnnotationKey::Actor)
            .unwrap_or(language.default_actor());
        let mut node = GraphNode::new(raw.name, kind).with_actor(actor);
        if let Some(description) = raw.annotations.get(AnnotationKey::Description) {
            node = node.with_metadata(description);
        }
        processes.push(node);
    }

    let mut seen: IndexMap<String, Span> = IndexMap::new();
    let mut decisions = Vec::new();
    for raw in rules::decision::extract(text) {
        if let Some(first) = seen.get(&raw.name) {
            collector.emit(duplicate("decision", &raw.name, raw.span, *first));
            continue;
        }
        seen.insert(raw.name.clone(), raw.span);

        let mut decision = Decision::new(raw.name);
        if let Some(target) = raw.true_branch {
            decision = decision.with_true_branch(target);
        }
        if let Some(target) = raw.false_branch {
            decision = decision.with_false_branch(target);
        }
        if let Some(condition) = raw.annotations.get(AnnotationKey::Condition) {
            decision = decision.with_metadata(condition);
        }
        if !decision.has_branches() {
            collector.emit(no_branches(decision.name(), raw.span, language));
        }
        decisions.push(decision);
    }

    if processes.is_empty() && decisions.is_empty() {
        debug!(language:% = language; "No structured markers found, using fallback skeleton");
        collector.emit(
            Diagnostic::warning("no `PROCESS:` or `DECISION:` markers found")
                .with_code(WarningCode::W001)
                .with_help("a minimal three-step flow was generated instead"),
        );
        processes = fallback_skeleton(language);
    }

    info!(
        language:% = language,
        processes = processes.len(),
        decisions = decisions.len();
        "Parsed business flow"
    );
    Parsed::new(
        BusinessFlow::new(language, processes, decisions),
        collector.finish(),
    )
}

/// The fixed linear flow returned for unstructured text.
fn fallback_skeleton(language: Language) -> Vec<GraphNode> {
    language
        .fallback_skeleton()
        .into_iter()
        .map(|(name, actor)| GraphNode::process(name, actor))
        .collect()
}
