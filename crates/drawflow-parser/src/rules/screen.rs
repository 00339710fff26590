//! `SCREEN: <name>` blocks of prototype descriptions.
//!
//! Unlike the other markers, `SCREEN:` must open a line (after optional list
//! or markdown prefixes) so bullet attributes such as `- Next screen: Home`
//! are not mistaken for declarations. A screen block may be followed by
//! bullet lines; a `- Layout: ...` bullet before the next screen becomes the
//! screen's description.

use std::sync::OnceLock;

use regex::Regex;

use crate::rules::{RawEntity, cached_regex, extract_entities};

/// A `SCREEN:` entity and the layout line of its block, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawScreen {
    pub entity: RawEntity,
    pub layout: Option<String>,
}

/// Extracts every `SCREEN:` entity in `text`.
pub(crate) fn extract(text: &str) -> Vec<RawScreen> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let pattern = cached_regex(
        &RE,
        r"(?im)^[ \t>#*+\-\d.)]*SCREEN[ \t]*[:：][ \t]*([^\[\],，\r\n]+)((?:[ \t]*\[[^\]\r\n]*\])*)",
    );
    let entities = extract_entities(pattern, text);

    let block_ends: Vec<usize> = entities
        .iter()
        .skip(1)
        .map(|entity| entity.full_span.start())
        .chain(std::iter::once(text.len()))
        .collect();

    entities
        .into_iter()
        .zip(block_ends)
        .map(|(entity, block_end)| {
            let block = text.get(entity.full_span.end()..block_end).unwrap_or("");
            RawScreen {
                layout: layout_line(block),
                entity,
            }
        })
        .collect()
}

fn layout_line(block: &str) -> Option<String> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let re = cached_regex(
        &RE,
        r"(?im)^[ \t]*[-*•][ \t]*(?:layout|布局)[ \t]*[:：][ \t]*([^\r\n]+)",
    )?;
    re.captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|layout| !layout.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "SCREEN: Login
- Layout: Centered card layout
- Components: Email input, Password input
- Next screen: Dashboard

SCREEN: Dashboard
- Components: Statistics cards
";

    #[test]
    fn test_screens_in_order() {
        let names: Vec<_> = extract(SAMPLE).into_iter().map(|s| s.entity.name).collect();
        assert_eq!(names, ["Login", "Dashboard"]);
    }

    #[test]
    fn test_layout_belongs_to_its_block() {
        let screens = extract(SAMPLE);
        assert_eq!(screens[0].layout.as_deref(), Some("Centered card layout"));
        assert_eq!(screens[1].layout, None);
    }

    #[test]
    fn test_next_screen_bullet_is_not_a_declaration() {
        let screens = extract("SCREEN: Login\n- Next screen: Dashboard\n");
        assert_eq!(screens.len(), 1);
    }

    #[test]
    fn test_markdown_prefixed_screens() {
        let names: Vec<_> = extract("## SCREEN: Cart\n1. **SCREEN:** Checkout")
            .into_iter()
            .map(|s| s.entity.name)
            .collect();
        assert_eq!(names, ["Cart", "Checkout"]);
    }

    #[test]
    fn test_chinese_layout_bullet() {
        let screens = extract("SCREEN：首页\n- 布局：网格");
        assert_eq!(screens[0].entity.name, "首页");
        assert_eq!(screens[0].layout.as_deref(), Some("网格"));
    }
}
