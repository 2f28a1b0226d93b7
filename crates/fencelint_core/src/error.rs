//! Linter error types.

use fencelint_parser::ParseError;
use fencelint_rules::RuleError;
use thiserror::Error;

/// Errors that can occur during linting.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("File error: {0}")]
    File(String),

    /// Tokenizer error.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Rule engine error.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = LinterError::config("bad key");
        assert_eq!(err.to_string(), "Configuration error: bad key");
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: LinterError = ParseError::invalid_source("bad input").into();
        assert!(matches!(err, LinterError::Parse(_)));
        assert_eq!(err.to_string(), "Invalid source: bad input");
    }

    #[test]
    fn test_rule_error_is_transparent() {
        let err: LinterError = RuleError::invalid_options("MD013", "expected a number").into();
        assert_eq!(
            err.to_string(),
            "Invalid options for MD013: expected a number"
        );
    }
}
