//! Linter configuration.
//!
//! The rule configuration is a markdownlint config file: a JSON object
//! mapping rule ids or aliases to `true`, `false` or an options object.
//! Comments and trailing commas are accepted.

use std::fs;
use std::path::Path;

use fencelint_rules::RuleConfig;
use jsonc_parser::ParseOptions;
use tracing::debug;

use crate::LinterError;

/// Config file names searched by [`LinterConfig::discover`], in order.
pub const CONFIG_FILES: &[&str] = &[".markdownlint.jsonc", ".markdownlint.json"];

/// Configuration for the linter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinterConfig {
    /// Base rule configuration, shared by every nested block.
    pub rules: RuleConfig,
}

impl LinterConfig {
    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the first config file found in `dir`.
    ///
    /// Returns an empty configuration when none exists.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, LinterError> {
        let dir = dir.as_ref();
        for name in CONFIG_FILES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!("Using config {}", candidate.display());
                return Self::from_file(candidate);
            }
        }

        debug!("No config file in {}, using defaults", dir.display());
        Ok(Self::new())
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.markdownlint.jsonc`, `.markdownlint.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::from_jsonc(&content)
    }

    /// Parses configuration from a JSON-with-comments string.
    ///
    /// Keys keep their file order, so the last key naming a rule wins.
    pub fn from_jsonc(content: &str) -> Result<Self, LinterError> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?;

        let Some(value) = value else {
            return Ok(Self::new());
        };

        let rules = RuleConfig::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))?;

        Ok(Self { rules })
    }
}
