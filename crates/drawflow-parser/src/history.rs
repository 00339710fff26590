//! Conversation-history formatting for generation prompts.

use std::{convert::Infallible, fmt, str::FromStr};

use drawflow_core::language::Language;

/// Number of most recent turns kept when formatting history.
pub const MAX_HISTORY_TURNS: usize = 5;

/// Author of a conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
    System,
    /// Any other role, rendered uppercased as written.
    Other(String),
}

impl Role {
    /// Returns the label this role is rendered with in `language`.
    pub fn label(&self, language: Language) -> String {
        match self {
            Role::User => language.user_role().to_string(),
            Role::Assistant => language.assistant_role().to_string(),
            Role::System => language.system_role().to_string(),
            Role::Other(name) => name.to_uppercase(),
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "user" | "human" => Role::User,
            "assistant" | "ai" | "model" => Role::Assistant,
            "system" => Role::System,
            _ => Role::Other(s.trim().to_string()),
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(Language::English))
    }
}

/// One prior message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    role: Role,
    content: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Renders the most recent turns as `ROLE: content` lines.
///
/// Only the last [`MAX_HISTORY_TURNS`] turns are kept, oldest first. An
/// empty history renders as the localized "no history" sentinel.
///
/// # Examples
///
/// ```
/// # use drawflow_core::language::Language;
/// # use drawflow_parser::{ConversationTurn, format_history};
/// let turns = [
///     ConversationTurn::user("Draw a checkout flow"),
///     ConversationTurn::assistant("PROCESS: Pay"),
/// ];
/// assert_eq!(
///     format_history(&turns, Language::English),
///     "USER: Draw a checkout flow\nASSISTANT: PROCESS: Pay"
/// );
/// assert_eq!(format_history(&[], Language::English), "No previous conversation.");
/// ```
pub fn format_history(turns: &[ConversationTurn], language: Language) -> String {
    if turns.is_empty() {
        return language.no_history().to_string();
    }

    let recent = &turns[turns.len().saturating_sub(MAX_HISTORY_TURNS)..];
    recent
        .iter()
        .map(|turn| format!("{}: {}", turn.role.label(language), turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}
