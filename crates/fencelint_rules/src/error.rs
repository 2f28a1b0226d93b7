//! Rule engine error types.

use thiserror::Error;

/// Errors that can occur while running rules.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A rule received options it cannot understand.
    #[error("Invalid options for {rule}: {message}")]
    InvalidOptions {
        /// Rule identifier.
        rule: String,
        /// Error message.
        message: String,
    },

    /// The rule configuration itself is malformed.
    #[error("Invalid rule configuration: {0}")]
    Config(String),

    /// The underlying linter failed on the content.
    #[error("Lint failed: {0}")]
    Lint(String),
}

impl RuleError {
    /// Creates an invalid options error.
    pub fn invalid_options(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
