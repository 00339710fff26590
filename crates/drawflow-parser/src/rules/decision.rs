//! `DECISION: <name> [condition="..."] -> Yes: <a>, No: <b>`
//!
//! Both documented branch forms are accepted: marked segments
//! (`Yes:`/`True:`/`是:` and `No:`/`False:`/`否:`) bind to their own slot,
//! and unmarked comma-separated segments (`-> TrueStep, FalseStep`) fill the
//! remaining slots in order.

use std::sync::OnceLock;

use regex::Regex;

use crate::{
    rules::{annotation::Annotations, cached_regex, clean_name, name_head},
    span::Span,
};

/// A `DECISION:` line split into name, annotations and branch targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawDecision {
    pub name: String,
    pub span: Span,
    pub annotations: Annotations,
    pub true_branch: Option<String>,
    pub false_branch: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    True,
    False,
}

/// Extracts every `DECISION:` line in `text`.
pub(crate) fn extract(text: &str) -> Vec<RawDecision> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let Some(re) = cached_regex(&RE, r"(?i)\bDECISION[ \t]*[:：][ \t]*([^\r\n]*)") else {
        return Vec::new();
    };

    re.captures_iter(text)
        .filter_map(|caps| {
            let rest = caps.get(1)?;
            split_decision(rest.as_str(), rest.start())
        })
        .collect()
}

fn split_decision(rest: &str, offset: usize) -> Option<RawDecision> {
    let (head, tail) = split_arrow(rest);

    let raw_name = name_head(head);
    let name = clean_name(raw_name);
    if name.is_empty() {
        return None;
    }

    let mut decision = RawDecision {
        name,
        span: Span::new(offset..offset + raw_name.trim_end().len()),
        annotations: Annotations::parse(head),
        true_branch: None,
        false_branch: None,
    };
    if let Some(tail) = tail {
        assign_branches(&mut decision, tail);
    }
    Some(decision)
}

/// Splits at the first `->` or `→` outside `[...]` annotation groups.
fn split_arrow(text: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    for (at, c) in text.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '→' if depth == 0 => return (&text[..at], Some(&text[at + c.len_utf8()..])),
            '-' if depth == 0 && text[at..].starts_with("->") => {
                return (&text[..at], Some(&text[at + 2..]));
            }
            _ => {}
        }
    }
    (text, None)
}

fn assign_branches(decision: &mut RawDecision, tail: &str) {
    let mut unmarked = Vec::new();

    for segment in tail.split([',', '，', ';', '；']) {
        let segment = segment.split('[').next().unwrap_or_default();
        match branch_marker(segment) {
            Some((slot, target)) => {
                let target = clean_name(target);
                if target.is_empty() {
                    continue;
                }
                let entry = match slot {
                    Slot::True => &mut decision.true_branch,
                    Slot::False => &mut decision.false_branch,
                };
                entry.get_or_insert(target);
            }
            None => {
                let target = clean_name(segment);
                if !target.is_empty() {
                    unmarked.push(target);
                }
            }
        }
    }

    for target in unmarked {
        if decision.true_branch.is_none() {
            decision.true_branch = Some(target);
        } else if decision.false_branch.is_none() {
            decision.false_branch = Some(target);
        }
    }
}

/// Recognizes a `Yes:`-style marker and returns the slot and the remainder.
fn branch_marker(segment: &str) -> Option<(Slot, &str)> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let re = cached_regex(&RE, r"(?i)^\s*(yes|true|是|no|false|否)\s*[:：]\s*(.*)$")?;

    let caps = re.captures(segment)?;
    let marker = caps.get(1)?.as_str().to_lowercase();
    let slot = match marker.as_str() {
        "yes" | "true" | "是" => Slot::True,
        _ => Slot::False,
    };
    Some((slot, caps.get(2).map_or("", |m| m.as_str())))
}
