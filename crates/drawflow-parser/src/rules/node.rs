//! `NODE: <name> [type=<kind>]`

use std::sync::OnceLock;

use regex::Regex;

use crate::rules::{RawEntity, cached_regex, extract_entities};

/// Extracts every `NODE:` entity in `text`.
pub(crate) fn extract(text: &str) -> Vec<RawEntity> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    extract_entities(cached_regex(&RE, entity_pattern!("NODE")), text)
}
