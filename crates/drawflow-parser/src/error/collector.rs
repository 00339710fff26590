//! Collector for accumulating diagnostics while a text is parsed.

use log::debug;

use crate::error::Diagnostic;

/// Accumulates diagnostics so a parse can report every issue instead of
/// stopping at the first.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        debug!(diagnostic:% = diagnostic; "Parser diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and hand back everything emitted, in order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
