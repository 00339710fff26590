//! Independent extraction rules.
//!
//! Each rule scans the whole text for one marker (`PROCESS:`, `DECISION:`,
//! `NODE:`, `EDGE:`, `SCREEN:`) and returns every non-overlapping match in
//! order of appearance. Rules never fail and never look at each other's
//! output; assembling matches into a graph is left to the callers in
//! [`crate::business`], [`crate::ui`] and [`crate::prototype`].
//!
//! Line breaks are not treated as structure beyond terminating a name, so
//! markers embedded in markdown lists, bold text or numbered steps are
//! still found.

/// Marker, optional full-width colon, a name that stops at a bracket, comma
/// or line end, then any trailing `[key=value]` annotations.
macro_rules! entity_pattern {
    ($keyword:literal) => {
        concat!(
            r"(?i)\b",
            $keyword,
            r"[ \t]*[:：][ \t]*([^\[\],，\r\n]+)((?:[ \t]*\[[^\]\r\n]*\])*)"
        )
    };
}

pub(crate) mod annotation;
pub(crate) mod decision;
pub(crate) mod edge;
pub(crate) mod node;
pub(crate) mod process;
pub(crate) mod screen;

use std::sync::OnceLock;

use log::error;
use regex::{Captures, Regex};

use crate::span::Span;

use annotation::Annotations;

/// Compiles `pattern` into `cell` on first use.
///
/// A pattern that fails to compile is logged once and makes its rule match
/// nothing.
pub(crate) fn cached_regex(
    cell: &'static OnceLock<Option<Regex>>,
    pattern: &str,
) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            error!(pattern = pattern, err:% = err; "Invalid extraction pattern");
            None
        }
    })
    .as_ref()
}

/// A named entity matched by a rule, with its annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawEntity {
    pub name: String,
    /// Span of the name as written, before cleaning.
    pub span: Span,
    pub annotations: Annotations,
    /// Span of the whole match, marker included.
    pub full_span: Span,
}

/// Runs an [`entity_pattern!`] regex over `text`.
///
/// Matches whose name is empty after cleaning are skipped.
pub(crate) fn extract_entities(re: Option<&Regex>, text: &str) -> Vec<RawEntity> {
    let Some(re) = re else {
        return Vec::new();
    };
    re.captures_iter(text)
        .filter_map(|caps| entity_from_captures(&caps))
        .collect()
}

fn entity_from_captures(caps: &Captures<'_>) -> Option<RawEntity> {
    let whole = caps.get(0)?;
    let name_match = caps.get(1)?;
    let name = clean_name(name_match.as_str());
    if name.is_empty() {
        return None;
    }
    let annotations = caps
        .get(2)
        .map(|m| Annotations::parse(m.as_str()))
        .unwrap_or_default();

    Some(RawEntity {
        name,
        span: Span::new(name_match.range()),
        annotations,
        full_span: Span::new(whole.range()),
    })
}

/// Characters stripped from both ends of a name along with whitespace:
/// markdown emphasis and ASCII or typographic quotes.
const NAME_NOISE: &[char] = &['*', '`', '"', '\'', '“', '”', '‘', '’', '_'];

/// Normalizes a raw name capture.
///
/// # Examples
///
/// ```text
/// clean_name("  **Validate Order** ") == "Validate Order"
/// clean_name("`Ship`") == "Ship"
/// ```
pub(crate) fn clean_name(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || NAME_NOISE.contains(&c))
        .to_string()
}

/// Returns `text` up to the first annotation bracket or comma.
pub(crate) fn name_head(text: &str) -> &str {
    let end = text
        .find(['[', ',', '，'])
        .unwrap_or(text.len());
    &text[..end]
}
