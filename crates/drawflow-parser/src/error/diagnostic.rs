//! The core diagnostic type.

use std::fmt;

use crate::{
    error::{label::Label, warning_code::WarningCode},
    span::Span,
};

/// A warning with source location information.
///
/// # Example
///
/// ```text
/// warning[W002]: process `Ship` is defined multiple times
///   --> output.txt:3:10
///    |
///  3 | PROCESS: Ship [actor=Warehouse]
///    |          ^^^^ duplicate ignored
///    |
///   --> output.txt:1:10
///    |
///  1 | PROCESS: Ship [actor=Sales]
///    |          ---- first defined here
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: Option<WarningCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a warning diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use drawflow_parser::error::Diagnostic;
    /// # use drawflow_parser::Span;
    ///
    /// let diag = Diagnostic::warning("decision `Approve` has no branches")
    ///     .with_label(Span::new(0..7), "no branch targets")
    ///     .with_help("write `DECISION: Approve -> Yes: A, No: B`");
    /// assert_eq!(diag.labels().len(), 1);
    /// ```
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn code(&self) -> Option<WarningCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(mut self, code: WarningCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "warning[W001]: message" or "warning: message"
        write!(f, "warning")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::warning("no structured markers found");

        assert_eq!(diag.message(), "no structured markers found");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::warning("node `Home` is defined multiple times")
            .with_code(WarningCode::W002)
            .with_label(Span::new(40..44), "duplicate ignored")
            .with_secondary_label(Span::new(6..10), "first defined here")
            .with_help("remove the duplicate line");

        assert_eq!(diag.code(), Some(WarningCode::W002));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(!diag.labels()[1].is_primary());
        assert_eq!(diag.help(), Some("remove the duplicate line"));
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::warning("unknown node kind `modal`").with_code(WarningCode::W003);

        assert_eq!(diag.to_string(), "warning[W003]: unknown node kind `modal`");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::warning("no structured markers found");

        assert_eq!(diag.to_string(), "warning: no structured markers found");
    }
}
