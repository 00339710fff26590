//! `[key=value]` annotations trailing an entity.

use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::rules::cached_regex;

/// The annotation keys the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum AnnotationKey {
    Actor,
    Type,
    Label,
    Description,
    Condition,
}

impl AnnotationKey {
    /// Recognizes a key, case-insensitively, including Chinese aliases.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "actor" | "role" | "角色" => Some(Self::Actor),
            "type" | "kind" | "类型" => Some(Self::Type),
            "label" | "标签" => Some(Self::Label),
            "description" | "desc" | "描述" => Some(Self::Description),
            "condition" | "条件" => Some(Self::Condition),
            _ => None,
        }
    }
}

/// The recognized annotations of one entity, in written order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Annotations {
    entries: Vec<(AnnotationKey, String)>,
}

impl Annotations {
    /// Parses every `[key=value]` group in `text`.
    ///
    /// Values may be bare or wrapped in ASCII or typographic double quotes.
    /// `:` and `：` are accepted in place of `=`. Unknown keys are skipped.
    pub fn parse(text: &str) -> Self {
        static RE: OnceLock<Option<Regex>> = OnceLock::new();
        let Some(re) = cached_regex(
            &RE,
            r#"\[[ \t]*([^\]=:：\s]+)[ \t]*[=:：][ \t]*(?:"([^"\]]*)"|“([^”\]]*)”|([^\]]*?))[ \t]*\]"#,
        ) else {
            return Self::default();
        };

        let mut entries = Vec::new();
        for caps in re.captures_iter(text) {
            let Some(raw_key) = caps.get(1) else {
                continue;
            };
            let Some(key) = AnnotationKey::from_key(raw_key.as_str()) else {
                debug!(key = raw_key.as_str(); "Ignoring unknown annotation");
                continue;
            };
            let value = [2, 3, 4]
                .into_iter()
                .find_map(|group| caps.get(group))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            entries.push((key, value));
        }
        Self { entries }
    }

    /// Returns the first non-empty value given for `key`.
    pub fn get(&self, key: AnnotationKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, value)| *k == key && !value.is_empty())
            .map(|(_, value)| value.as_str())
    }
}
