//! Language resolution for model output.
//!
//! Branch markers are the strongest evidence of the language the model wrote
//! in: `Yes:`/`No:` against `是:`/`否:` and full-width colons. Names are
//! often quoted from the user's requirements and may be in either language,
//! so ideographs only decide when the markers do not.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use drawflow_core::language::{Language, LanguagePreference};

use crate::rules::cached_regex;

/// Grammar words that appear in either language and carry no signal.
const GRAMMAR_WORDS: &[&str] = &[
    "process",
    "decision",
    "node",
    "edge",
    "screen",
    "actor",
    "role",
    "type",
    "kind",
    "label",
    "description",
    "desc",
    "condition",
    "layout",
    "start",
    "end",
    "yes",
    "no",
    "true",
    "false",
];

/// Resolves `preference` against `text`.
///
/// With [`LanguagePreference::Auto`] the branch markers vote first; a tie
/// falls back to comparing ideographs with the words that are not grammar.
pub(crate) fn resolve(preference: LanguagePreference, text: &str) -> Language {
    if preference != LanguagePreference::Auto {
        return preference.resolve(text);
    }

    let (chinese, english) = marker_votes(text);
    let language = if chinese > english {
        Language::Chinese
    } else if english > chinese {
        Language::English
    } else {
        Language::detect_ignoring(text, GRAMMAR_WORDS)
    };
    debug!(chinese = chinese, english = english, language:% = language; "Resolved flow language");
    language
}

/// Counts `(chinese, english)` marker occurrences.
fn marker_votes(text: &str) -> (usize, usize) {
    static CHINESE: OnceLock<Option<Regex>> = OnceLock::new();
    static ENGLISH: OnceLock<Option<Regex>> = OnceLock::new();

    let count = |re: Option<&Regex>| re.map_or(0, |re| re.find_iter(text).count());
    (
        count(cached_regex(&CHINESE, r"[是否][ \t]*[:：]|：")),
        count(cached_regex(&ENGLISH, r"(?i)\b(?:yes|no|true|false)[ \t]*:")),
    )
}
