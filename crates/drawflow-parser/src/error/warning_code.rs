//! Codes for the warnings the parser can report.

use std::fmt;

/// Warning codes for categorizing parser diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// No structured markers found.
    ///
    /// The text contained no `PROCESS:` or `DECISION:` lines, so the fixed
    /// fallback skeleton was returned instead.
    W001,

    /// Duplicate name.
    ///
    /// An entity reused a name already defined earlier in the same
    /// collection. The later definition is ignored.
    W002,

    /// Unknown node kind.
    ///
    /// A `type` annotation named no known kind and was normalized to the
    /// default for its context.
    W003,

    /// Decision without branches.
    ///
    /// A `DECISION:` line named no branch target.
    W004,
}

impl WarningCode {
    /// Returns the string representation of the code (e.g., "W001").
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::W001 => "W001",
            WarningCode::W002 => "W002",
            WarningCode::W003 => "W003",
            WarningCode::W004 => "W004",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            WarningCode::W001 => "fallback skeleton used",
            WarningCode::W002 => "duplicate name",
            WarningCode::W003 => "unknown node kind",
            WarningCode::W004 => "decision without branches",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_code_display() {
        assert_eq!(WarningCode::W001.to_string(), "W001");
        assert_eq!(WarningCode::W004.to_string(), "W004");
    }

    #[test]
    fn test_warning_code_description() {
        assert_eq!(WarningCode::W002.description(), "duplicate name");
        assert_eq!(WarningCode::W003.description(), "unknown node kind");
    }
}
