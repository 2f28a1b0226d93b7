//! # fencelint_core
//!
//! Core engine for fencelint.
//!
//! This crate provides:
//! - Configuration loading (`.markdownlint.jsonc` / `.markdownlint.json`)
//! - Recursive extraction of `markdown`/`md` fences
//! - Linting of each extracted block with first-line-heading and
//!   link-fragments turned off
//! - Mapping of findings back to lines of the original file
//! - The `Linter` orchestrator tying it together
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//! use fencelint_core::{Linter, LinterConfig};
//!
//! let linter = Linter::new(LinterConfig::new())?;
//! let doc = "# Guide\n\n```markdown\n#Getting started\n```\n";
//!
//! let (blocks, entries) = linter.lint_content(doc, Path::new("guide.md"))?;
//! assert_eq!(blocks.len(), 1);
//! assert!(entries[0].findings.iter().any(|f| f.line_in_file == 4));
//! # Ok::<(), fencelint_core::LinterError>(())
//! ```

mod config;
mod error;
mod extractor;
pub mod file_finder;
mod linter;
mod nested_linter;
mod report;

pub use config::{CONFIG_FILES, LinterConfig};
pub use error::LinterError;
pub use extractor::{ExtractedBlock, FenceExtractor, MARKDOWN_LANGUAGES};
pub use linter::Linter;
pub use nested_linter::{NestedLinter, SUPPRESSED_RULES};
pub use report::{BlockReport, FileSummary, MappedFinding, Report, map_file};

pub use fencelint_rules::{Finding, RuleConfig, RuleSetting};
