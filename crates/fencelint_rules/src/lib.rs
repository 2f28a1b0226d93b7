//! # fencelint_rules
//!
//! markdownlint-compatible rule engine for fencelint.
//!
//! This crate provides:
//! - The `RuleEngine` trait the nested linter talks to
//! - `MarkdownRuleEngine`, which runs markdownlint's rules as implemented by `rumdl`
//! - `RuleConfig`, a markdownlint-style rule configuration map
//! - `Finding`, one position-tagged rule violation
//!
//! ## Example
//!
//! ```rust
//! use fencelint_rules::{MarkdownRuleEngine, RuleConfig, RuleEngine};
//!
//! let engine = MarkdownRuleEngine::new();
//! let findings = engine.lint("# Title\n\nText \n", &RuleConfig::new()).unwrap();
//!
//! assert!(findings.iter().any(|f| f.rule_id() == "MD009"));
//! ```

mod config;
mod engine;
mod error;
mod finding;
mod names;

pub use config::{DEFAULT_KEY, RuleConfig, RuleSetting};
pub use engine::{MarkdownRuleEngine, RuleEngine};
pub use error::RuleError;
pub use finding::Finding;
pub use names::{MARKDOWNLINT_RULES, canonical_id, rule_names};
