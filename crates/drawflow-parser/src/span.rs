//! Byte-offset source spans.

use std::ops::Range;

/// A half-open byte range into the text being parsed.
///
/// Spans let diagnostics point back at the model output that produced them.
///
/// # Examples
///
/// ```
/// # use drawflow_parser::Span;
/// let span = Span::new(9..17);
/// assert_eq!(span.len(), 8);
/// assert_eq!(&"PROCESS: Validate"[span.range()], "Validate");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
