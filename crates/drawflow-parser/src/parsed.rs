//! The result of a parse: a value plus everything worth telling the user.

use crate::error::Diagnostic;

/// A parsed value together with the warnings produced while parsing it.
///
/// Parsing never fails, so there is no error variant: problems with the
/// input are reported through [`Parsed::diagnostics`].
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    value: T,
    diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }
}
