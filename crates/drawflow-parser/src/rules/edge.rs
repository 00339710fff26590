//! `EDGE: <from> -> <to> [label="..."]`

use std::sync::OnceLock;

use regex::Regex;

use crate::{
    rules::{
        annotation::{AnnotationKey, Annotations},
        cached_regex, clean_name,
    },
    span::Span,
};

/// A directed transition between two names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawEdge {
    pub from: String,
    pub to: String,
    /// Empty when no label annotation was given.
    pub label: String,
    pub span: Span,
}

/// Extracts every `EDGE:` line in `text`.
///
/// Arrows may be written `->`, `-->`, `=>` or `→`.
pub(crate) fn extract(text: &str) -> Vec<RawEdge> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let Some(re) = cached_regex(
        &RE,
        r"(?i)\bEDGE[ \t]*[:：][ \t]*([^\[\],，\r\n]+?)[ \t]*(?:-->|->|=>|→)[ \t]*([^\[\],，\r\n]+)((?:[ \t]*\[[^\]\r\n]*\])*)",
    ) else {
        return Vec::new();
    };

    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let from = clean_name(caps.get(1)?.as_str());
            let to = clean_name(caps.get(2)?.as_str());
            if from.is_empty() || to.is_empty() {
                return None;
            }
            let label = caps
                .get(3)
                .map(|m| Annotations::parse(m.as_str()))
                .and_then(|annotations| annotations.get(AnnotationKey::Label).map(str::to_string))
                .unwrap_or_default();

            Some(RawEdge {
                from,
                to,
                label,
                span: Span::new(whole.range()),
            })
        })
        .collect()
}
