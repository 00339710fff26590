//! Language detection and localized literals.
//!
//! Model output arrives in English or Chinese. Every literal that ends up in a
//! diagram without coming from the model itself (branch markers, synthetic
//! start/end labels, default actors, sentinels) is looked up through
//! [`Language`] so the output reads in the same language as the input.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The language a flow is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "zh")]
    Chinese,
}

impl Language {
    /// Detects the apparent language of `text`.
    ///
    /// The text is Chinese when it holds at least as many CJK ideographs as
    /// ASCII words, and English otherwise. Full-width punctuation alone does
    /// not count.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawflow_core::language::Language;
    /// assert_eq!(Language::detect("PROCESS: Validate"), Language::English);
    /// assert_eq!(Language::detect("DECISION: 审批 -> 是:发货"), Language::Chinese);
    /// assert_eq!(Language::detect("Ship the order to 上海 today"), Language::English);
    /// ```
    pub fn detect(text: &str) -> Self {
        Self::detect_ignoring(text, &[])
    }

    /// Like [`Language::detect`], but ASCII words listed in `ignored` are
    /// not counted. Matching is case-insensitive.
    pub fn detect_ignoring(text: &str, ignored: &[&str]) -> Self {
        let ideographs = text.chars().filter(|c| is_cjk_ideograph(*c)).count();
        if ideographs == 0 {
            return Self::English;
        }

        let words = text
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|word| !word.is_empty())
            .filter(|word| !ignored.iter().any(|k| k.eq_ignore_ascii_case(word)))
            .count();
        if ideographs >= words {
            Self::Chinese
        } else {
            Self::English
        }
    }

    /// Marker used on the edge leading to a decision's true branch.
    pub fn affirmative(self) -> &'static str {
        match self {
            Self::English => "Yes",
            Self::Chinese => "是",
        }
    }

    /// Marker used on the edge leading to a decision's false branch.
    pub fn negative(self) -> &'static str {
        match self {
            Self::English => "No",
            Self::Chinese => "否",
        }
    }

    /// Label of the synthetic start node.
    pub fn start_label(self) -> &'static str {
        match self {
            Self::English => "Start",
            Self::Chinese => "开始",
        }
    }

    /// Label of the synthetic end node.
    pub fn end_label(self) -> &'static str {
        match self {
            Self::English => "End",
            Self::Chinese => "结束",
        }
    }

    /// Actor assigned to a process step that names none.
    pub fn default_actor(self) -> &'static str {
        match self {
            Self::English => "System",
            Self::Chinese => "系统",
        }
    }

    /// Rendered in place of an empty conversation history.
    pub fn no_history(self) -> &'static str {
        match self {
            Self::English => "No previous conversation.",
            Self::Chinese => "暂无历史对话。",
        }
    }

    pub fn user_role(self) -> &'static str {
        match self {
            Self::English => "USER",
            Self::Chinese => "用户",
        }
    }

    pub fn assistant_role(self) -> &'static str {
        match self {
            Self::English => "ASSISTANT",
            Self::Chinese => "助手",
        }
    }

    pub fn system_role(self) -> &'static str {
        match self {
            Self::English => "SYSTEM",
            Self::Chinese => "系统",
        }
    }

    /// Title of the swimlane wrapping a prototype wireframe.
    pub fn prototype_title(self) -> &'static str {
        match self {
            Self::English => "Prototype Screens",
            Self::Chinese => "原型页面",
        }
    }

    /// The `(name, actor)` pairs of the minimal linear flow used when model
    /// output contains no recognizable structure.
    pub fn fallback_skeleton(self) -> [(&'static str, &'static str); 3] {
        match self {
            Self::English => [
                ("Start Process", "User"),
                ("Process Request", "System"),
                ("Complete", "System"),
            ],
            Self::Chinese => [
                ("开始流程", "用户"),
                ("处理请求", "系统"),
                ("完成", "系统"),
            ],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "en"),
            Self::Chinese => write!(f, "zh"),
        }
    }
}

/// Language selection as configured by the user.
///
/// [`LanguagePreference::Auto`] defers to [`Language::detect`] on the text
/// being processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePreference {
    #[default]
    Auto,
    #[serde(alias = "en")]
    English,
    #[serde(alias = "zh")]
    Chinese,
}

impl LanguagePreference {
    /// Resolves the preference against the text it will apply to.
    pub fn resolve(self, text: &str) -> Language {
        match self {
            Self::Auto => Language::detect(text),
            Self::English => Language::English,
            Self::Chinese => Language::Chinese,
        }
    }
}

impl FromStr for LanguagePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "en" | "english" => Ok(Self::English),
            "zh" | "chinese" => Ok(Self::Chinese),
            other => Err(format!("unknown language `{other}`, expected auto, en or zh")),
        }
    }
}

fn is_cjk_ideograph(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english() {
        assert_eq!(
            Language::detect("PROCESS: Validate [actor=System]"),
            Language::English
        );
        assert_eq!(Language::detect(""), Language::English);
    }

    #[test]
    fn test_detect_chinese() {
        assert_eq!(Language::detect("PROCESS: 验证订单"), Language::Chinese);
    }

    #[test]
    fn test_detect_counts_ideographs_against_words() {
        assert_eq!(
            Language::detect("Approve the refund for 张三 before Friday"),
            Language::English
        );
        assert_eq!(Language::detect("在App中确认订单"), Language::Chinese);
    }

    #[test]
    fn test_detect_ignoring_keywords() {
        let text = "NODE: 登录 [type=start]";
        assert_eq!(Language::detect(text), Language::English);
        assert_eq!(
            Language::detect_ignoring(text, &["node", "type", "start"]),
            Language::Chinese
        );
    }

    #[test]
    fn test_full_width_punctuation_alone_is_not_chinese() {
        assert_eq!(Language::detect("PROCESS：Validate，Ship"), Language::English);
    }

    #[test]
    fn test_markers() {
        assert_eq!(Language::English.affirmative(), "Yes");
        assert_eq!(Language::English.negative(), "No");
        assert_eq!(Language::Chinese.affirmative(), "是");
        assert_eq!(Language::Chinese.negative(), "否");
    }

    #[test]
    fn test_fallback_skeleton_is_localized() {
        let en = Language::English.fallback_skeleton();
        let zh = Language::Chinese.fallback_skeleton();
        assert_eq!(en[1], ("Process Request", "System"));
        assert_eq!(zh[2], ("完成", "系统"));
    }

    #[test]
    fn test_preference_resolve() {
        assert_eq!(
            LanguagePreference::Auto.resolve("审批"),
            Language::Chinese
        );
        assert_eq!(
            LanguagePreference::English.resolve("审批"),
            Language::English
        );
        assert_eq!(
            LanguagePreference::Chinese.resolve("approve"),
            Language::Chinese
        );
    }

    #[test]
    fn test_preference_from_str() {
        assert_eq!(
            "ZH".parse::<LanguagePreference>(),
            Ok(LanguagePreference::Chinese)
        );
        assert_eq!(
            "english".parse::<LanguagePreference>(),
            Ok(LanguagePreference::English)
        );
        assert!("fr".parse::<LanguagePreference>().is_err());
    }
}
