//! Lints the content of one extracted block.

use fencelint_rules::{Finding, MarkdownRuleEngine, RuleConfig, RuleEngine, RuleSetting};
use tracing::warn;

use crate::LinterError;

/// Rules that never apply to nested snippets, each listed by id then aliases.
///
/// A snippet rarely starts with a top-level heading, and its link fragments
/// usually point into some other document.
pub const SUPPRESSED_RULES: &[&[&str]] = &[
    &["MD041", "first-line-heading", "first-line-h1"],
    &["MD051", "link-fragments"],
];

/// Runs the rule engine over nested block content.
pub struct NestedLinter {
    engine: Box<dyn RuleEngine>,
    config: RuleConfig,
}

impl NestedLinter {
    /// Creates a nested linter using the built-in engine.
    pub fn new(base: &RuleConfig) -> Self {
        Self::with_engine(Box::new(MarkdownRuleEngine::new()), base)
    }

    /// Creates a nested linter with a custom engine.
    pub fn with_engine(engine: Box<dyn RuleEngine>, base: &RuleConfig) -> Self {
        for key in base.unknown_keys() {
            warn!("Unknown rule in configuration: {}", key);
        }
        Self {
            engine,
            config: Self::effective_config(base),
        }
    }

    /// Returns `base` with every suppressed rule forced off.
    ///
    /// Keys naming a suppressed rule (by id or alias, any case) are dropped
    /// and replaced by `"<id>": false`; all other keys are kept as is.
    pub fn effective_config(base: &RuleConfig) -> RuleConfig {
        let mut config = base.clone();
        for names in SUPPRESSED_RULES {
            config.remove_matching(names);
        }
        for names in SUPPRESSED_RULES {
            config.insert(names[0], RuleSetting::Enabled(false));
        }
        config
    }

    /// The configuration every block is linted with.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Lints `content`, returning findings positioned within it.
    pub fn lint(&self, content: &str) -> Result<Vec<Finding>, LinterError> {
        Ok(self.engine.lint(content, &self.config)?)
    }
}
