//! Warning constructors shared by the flow assemblers.

use drawflow_core::{graph::NodeKind, language::Language};

use crate::{
    error::{Diagnostic, DiagnosticCollector, WarningCode},
    span::Span,
};

/// Resolves a `type` annotation, reporting `W003` when it is unrecognized.
pub(crate) fn resolve_kind(
    token: Option<&str>,
    default: NodeKind,
    span: Span,
    collector: &mut DiagnosticCollector,
) -> NodeKind {
    let Some(token) = token else {
        return default;
    };
    NodeKind::from_token(token).unwrap_or_else(|| {
        collector.emit(
            Diagnostic::warning(format!("unknown node kind `{token}`"))
                .with_code(WarningCode::W003)
                .with_label(span, format!("treated as {default}"))
                .with_help("known kinds are start, end, process, decision and screen"),
        );
        default
    })
}

pub(crate) fn duplicate(what: &str, name: &str, span: Span, first: Span) -> Diagnostic {
    Diagnostic::warning(format!("{what} `{name}` is defined multiple times"))
        .with_code(WarningCode::W002)
        .with_label(span, "duplicate ignored")
        .with_secondary_label(first, "first defined here")
}

pub(crate) fn no_branches(name: &str, span: Span, language: Language) -> Diagnostic {
    Diagnostic::warning(format!("decision `{name}` has no branches"))
        .with_code(WarningCode::W004)
        .with_label(span, "no branch targets")
        .with_help(format!(
            "write `DECISION: {name} -> {}: <step>, {}: <step>`",
            language.affirmative(),
            language.negative()
        ))
}
