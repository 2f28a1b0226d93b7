//! Finding type for rule violations.

use serde::{Deserialize, Serialize};

/// A single rule violation, positioned within the linted string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    /// Rule identifiers: canonical id first, then aliases.
    pub rule_names: Vec<String>,

    /// Human-readable rule description.
    pub rule_description: String,

    /// 1-based line within the linted string.
    pub line_number: usize,

    /// Extra diagnostic text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,

    /// 1-based column and length of the offending range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_range: Option<(usize, usize)>,
}

impl Finding {
    /// Creates a finding at `line_number` for the rule known as `rule_names`.
    pub fn new(
        rule_names: Vec<String>,
        rule_description: impl Into<String>,
        line_number: usize,
    ) -> Self {
        Self {
            rule_names,
            rule_description: rule_description.into(),
            line_number,
            error_detail: None,
            error_range: None,
        }
    }

    /// Sets the detail text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.error_detail = Some(detail.into());
        self
    }

    /// Sets the column range.
    pub fn with_range(mut self, column: usize, length: usize) -> Self {
        self.error_range = Some((column, length));
        self
    }

    /// Canonical rule id (e.g. `MD022`).
    pub fn rule_id(&self) -> &str {
        self.rule_names.first().map_or("", String::as_str)
    }

    /// 1-based column, if the rule reported one.
    pub fn column(&self) -> Option<usize> {
        self.error_range.map(|(column, _)| column)
    }
}
