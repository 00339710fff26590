//! The seam to the language model.
//!
//! Drawflow never talks to a model itself. Callers supply a
//! [`TextGenerator`] that turns a [`Payload`] into raw text, and
//! [`DrawflowBuilder::generate`](crate::DrawflowBuilder::generate) parses
//! and renders whatever comes back.

use std::{error::Error, fmt, str::FromStr};

use drawflow_parser::error::Diagnostic;

/// The kind of diagram requested from the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    BusinessFlow,
    UiFlow,
    Prototype,
}

impl DiagramKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BusinessFlow => "business",
            Self::UiFlow => "ui",
            Self::Prototype => "prototype",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "business" | "business-flow" | "business_flow" => Ok(Self::BusinessFlow),
            "ui" | "ui-flow" | "ui_flow" => Ok(Self::UiFlow),
            "prototype" => Ok(Self::Prototype),
            other => Err(format!(
                "unknown diagram kind `{other}`, expected business, ui or prototype"
            )),
        }
    }
}

/// Input handed to a [`TextGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    requirements: String,
    history: String,
}

impl Payload {
    /// Creates a payload from the user's requirements and the already
    /// formatted conversation history.
    pub fn new(requirements: impl Into<String>, history: impl Into<String>) -> Self {
        Self {
            requirements: requirements.into(),
            history: history.into(),
        }
    }

    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    pub fn history(&self) -> &str {
        &self.history
    }
}

/// Produces raw model text for a diagram request.
///
/// Implemented for any `Fn(DiagramKind, &Payload) -> Result<String, E>`.
///
/// # Examples
///
/// ```
/// # use drawflow::{DiagramKind, Payload, TextGenerator};
/// let echo = |_: DiagramKind, payload: &Payload| -> Result<String, String> {
///     Ok(format!("PROCESS: {}", payload.requirements()))
/// };
/// let text = echo.generate(DiagramKind::BusinessFlow, &Payload::new("Review", "")).unwrap();
/// assert_eq!(text, "PROCESS: Review");
/// ```
pub trait TextGenerator {
    type Error: Into<Box<dyn Error + Send + Sync>>;

    /// Returns the model's answer for `kind` given `payload`.
    ///
    /// # Errors
    ///
    /// Returns the generator's own error when no text could be produced.
    fn generate(&self, kind: DiagramKind, payload: &Payload) -> Result<String, Self::Error>;
}

impl<F, E> TextGenerator for F
where
    F: Fn(DiagramKind, &Payload) -> Result<String, E>,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    type Error = E;

    fn generate(&self, kind: DiagramKind, payload: &Payload) -> Result<String, E> {
        self(kind, payload)
    }
}

/// The outcome of a generate-parse-render run.
#[derive(Debug, Clone)]
pub struct Rendered {
    xml: String,
    raw_text: String,
    diagnostics: Vec<Diagnostic>,
}

impl Rendered {
    pub(crate) fn new(xml: String, raw_text: String, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            xml,
            raw_text,
            diagnostics,
        }
    }

    /// The draw.io document.
    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// The text the document was parsed from.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Warnings raised while parsing [`raw_text`](Self::raw_text).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_xml(self) -> String {
        self.xml
    }
}
