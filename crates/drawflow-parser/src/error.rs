//! Diagnostics reported while extracting flows from model output.
//!
//! Parsing never fails: malformed or partial output degrades to a
//! best-effort graph. What the parser had to guess or discard is reported
//! as [`Diagnostic`]s alongside the result so callers can surface it. Every
//! diagnostic is a warning.
//!
//! # Example
//!
//! ```
//! # use drawflow_parser::error::{Diagnostic, WarningCode};
//! # use drawflow_parser::Span;
//!
//! let diag = Diagnostic::warning("process `Ship` is defined multiple times")
//!     .with_code(WarningCode::W002)
//!     .with_label(Span::new(40..44), "duplicate ignored")
//!     .with_secondary_label(Span::new(9..13), "first defined here")
//!     .with_help("each step name should appear once");
//! assert_eq!(diag.to_string(), "warning[W002]: process `Ship` is defined multiple times");
//! ```

mod collector;
mod diagnostic;
mod label;
mod warning_code;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use label::Label;
pub use warning_code::WarningCode;
