//! # Drawflow Parser
//!
//! Best-effort extraction of flow graphs from language-model output.
//!
//! Model output nominally follows a small line grammar (`PROCESS:`,
//! `DECISION:`, `NODE:`, `EDGE:`, `SCREEN:`) but is free text in practice.
//! Every marker is matched independently across the whole text, in English
//! or Chinese, and the matches are assembled into the graph types of
//! [`drawflow_core::graph`]. Parsing never fails; anything the parser had to
//! guess or drop is reported as a warning in [`Parsed::diagnostics`].
//!
//! ## Usage
//!
//! ```
//! # use drawflow_parser::{parse_business_flow, ParseConfig};
//! let text = "PROCESS: Validate [actor=System]\nDECISION: Approve -> Yes:Ship, No:Reject";
//! let parsed = parse_business_flow(text, &ParseConfig::default());
//!
//! let flow = parsed.value();
//! assert_eq!(flow.processes()[0].name(), "Validate");
//! assert_eq!(flow.decisions()[0].true_branch(), Some("Ship"));
//! assert!(parsed.diagnostics().is_empty());
//! ```

mod business;
pub mod error;
mod history;
mod language;
mod parsed;
mod prototype;
mod rules;
mod span;
mod ui;
mod warnings;

pub use history::{ConversationTurn, MAX_HISTORY_TURNS, Role, format_history};
pub use parsed::Parsed;
pub use span::Span;

use drawflow_core::{
    graph::{BusinessFlow, Prototype, UiFlow},
    language::LanguagePreference,
};

/// Configuration for the parse entry points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseConfig {
    language: LanguagePreference,
}

impl ParseConfig {
    /// Creates a configuration with the given language preference.
    ///
    /// # Arguments
    ///
    /// * `language` - Language for markers and synthetic labels;
    ///   [`LanguagePreference::Auto`] decides from the branch markers, then
    ///   from the script of the text.
    pub fn new(language: LanguagePreference) -> Self {
        Self { language }
    }

    pub fn language(&self) -> LanguagePreference {
        self.language
    }
}

/// Parses a business process description.
///
/// Extracts `PROCESS:` steps and `DECISION:` points. When neither is present
/// the localized three-step fallback skeleton is returned with a `W001`
/// warning, so the flow is never empty.
///
/// # Example
///
/// ```
/// # use drawflow_parser::{parse_business_flow, ParseConfig};
/// let parsed = parse_business_flow("Sorry, I cannot help with that.", &ParseConfig::default());
/// assert_eq!(parsed.value().processes().len(), 3);
/// assert_eq!(parsed.diagnostics().len(), 1);
/// ```
pub fn parse_business_flow(text: &str, config: &ParseConfig) -> Parsed<BusinessFlow> {
    business::parse(text, config)
}

/// Parses a UI navigation flow from `NODE:`, `EDGE:` and `DECISION:` lines.
///
/// Nodes without a recognized `type` are screens. Edges are kept even when
/// they reference undeclared names.
pub fn parse_ui_flow(text: &str, config: &ParseConfig) -> Parsed<UiFlow> {
    ui::parse(text, config)
}

/// Parses a prototype description into its `SCREEN:` list.
pub fn parse_prototype(text: &str, config: &ParseConfig) -> Parsed<Prototype> {
    prototype::parse(text, config)
}
