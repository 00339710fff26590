//! Error types for Drawflow operations.
//!
//! Parsing and rendering never fail: malformed model output degrades to a
//! best-effort graph with warnings. [`DrawflowError`] therefore only covers
//! the surroundings of the pipeline, namely the text generator and file
//! output.

use std::{error::Error, io};

use thiserror::Error;

/// The main error type for Drawflow operations.
#[derive(Debug, Error)]
pub enum DrawflowError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Text generation failed: {0}")]
    Generate(Box<dyn Error + Send + Sync>),
}

impl DrawflowError {
    /// Wraps a failure reported by a [`TextGenerator`](crate::TextGenerator).
    pub fn generate(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Generate(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_message() {
        let err = DrawflowError::generate("model unreachable");
        assert_eq!(err.to_string(), "Text generation failed: model unreachable");
    }

    #[test]
    fn test_io_conversion() {
        let err: DrawflowError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, DrawflowError::Io(_)));
    }
}
