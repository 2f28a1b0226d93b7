//! Core linter engine.

use std::path::{Path, PathBuf};

use fencelint_rules::RuleEngine;
use tracing::{debug, info};

use crate::file_finder::FileFinder;
use crate::report::{BlockReport, Report, map_file};
use crate::{ExtractedBlock, FenceExtractor, LinterConfig, LinterError, NestedLinter};

/// The core linter engine.
///
/// Orchestrates file discovery, fence extraction, nested linting and
/// coordinate mapping. Files and blocks are processed sequentially so the
/// report order matches discovery and extraction order.
pub struct Linter {
    extractor: FenceExtractor,
    nested: NestedLinter,
    finder: FileFinder,
    base_dir: PathBuf,
}

impl Linter {
    /// Creates a new linter with the given configuration.
    ///
    /// Files are discovered relative to the current directory.
    pub fn new(config: LinterConfig) -> Result<Self, LinterError> {
        Ok(Self {
            extractor: FenceExtractor::new(),
            nested: NestedLinter::new(&config.rules),
            finder: FileFinder::new(&[])?,
            base_dir: PathBuf::from("."),
        })
    }

    /// Sets exclude glob patterns.
    pub fn with_exclude(mut self, exclude: &[String]) -> Result<Self, LinterError> {
        self.finder = FileFinder::new(exclude)?;
        Ok(self)
    }

    /// Bounds the extraction depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.extractor = self.extractor.with_max_depth(depth);
        self
    }

    /// Sets the directory patterns are resolved against.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Replaces the rule engine used for nested blocks.
    pub fn with_engine(mut self, engine: Box<dyn RuleEngine>) -> Self {
        self.nested = NestedLinter::with_engine(engine, self.nested.config());
        self
    }

    /// Lints files matching the given patterns.
    ///
    /// The first error aborts the run.
    pub fn lint_patterns(&self, patterns: &[String]) -> Result<Report, LinterError> {
        let files = self.finder.discover_files(patterns, &self.base_dir)?;
        self.lint_files(&files)
    }

    /// Lints the given files in order.
    ///
    /// Paths under the base directory are reported relative to it, others as
    /// given.
    pub fn lint_files(&self, paths: &[PathBuf]) -> Result<Report, LinterError> {
        let mut report = Report::new();

        for path in paths {
            let shown = self.display_path(path);
            let blocks = self.extractor.extract_file(path)?;
            if !blocks.is_empty() {
                debug!("{}: {} nested block(s)", shown.display(), blocks.len());
            }

            let entries = self.lint_blocks(&shown, &blocks)?;
            report.push_file(shown, blocks.len(), entries);
        }

        info!(
            "Extracted {} nested blocks from {} files",
            report.total_blocks,
            report.files.len()
        );
        Ok(report)
    }

    /// Extracts and lints the nested blocks of one document.
    ///
    /// Returns every extracted block alongside the entries of blocks that
    /// produced findings.
    pub fn lint_content(
        &self,
        content: &str,
        path: &Path,
    ) -> Result<(Vec<ExtractedBlock>, Vec<BlockReport>), LinterError> {
        let blocks = self.extractor.extract(content, path, 0, 0, "")?;
        let entries = self.lint_blocks(path, &blocks)?;
        Ok((blocks, entries))
    }

    fn lint_blocks(
        &self,
        path: &Path,
        blocks: &[ExtractedBlock],
    ) -> Result<Vec<BlockReport>, LinterError> {
        let findings = blocks
            .iter()
            .map(|block| {
                debug!("Linting block at {} ({})", block.absolute_line, block.ancestry_path);
                self.nested.lint(&block.content)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(map_file(path, blocks, findings))
    }

    fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.base_dir)
            .unwrap_or(path)
            .to_path_buf()
    }
}
