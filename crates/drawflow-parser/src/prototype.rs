//! Prototype assembly from `SCREEN:` blocks.

use indexmap::IndexMap;
use log::info;

use drawflow_core::graph::{GraphNode, NodeKind, Prototype};

use crate::{
    ParseConfig, Parsed, error::DiagnosticCollector, rules, span::Span, warnings::duplicate,
};

/// Parses a prototype description into its list of screens.
///
/// No fallback applies: text without screens yields an empty prototype.
pub(crate) fn parse(text: &str, config: &ParseConfig) -> Parsed<Prototype> {
    let language = crate::language::resolve(config.language(), text);
    let mut collector = DiagnosticCollector::new();

    let mut seen: IndexMap<String, Span> = IndexMap::new();
    let mut screens = Vec::new();
    for raw in rules::screen::extract(text) {
        let entity = raw.entity;
        if let Some(first) = seen.get(&entity.name) {
            collector.emit(duplicate("screen", &entity.name, entity.span, *first));
            continue;
        }
        seen.insert(entity.name.clone(), entity.span);

        let mut screen = GraphNode::new(entity.name, NodeKind::Screen);
        if let Some(layout) = raw.layout {
            screen = screen.with_metadata(layout);
        }
        screens.push(screen);
    }

    info!(language:% = language, screens = screens.len(); "Parsed prototype");
    Parsed::new(Prototype::new(language, screens), collector.finish())
}
