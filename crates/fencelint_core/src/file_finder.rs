//! Markdown file discovery.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::info;
use walkdir::WalkDir;

use crate::error::LinterError;

/// Default pattern for files to scan.
pub const DEFAULT_PATTERN: &str = "**/*.md";

/// Default pattern for paths never scanned.
pub const DEFAULT_EXCLUDE: &str = "**/node_modules/**";

/// Finds files by glob, relative to a base directory.
pub struct FileFinder {
    exclude_globs: Option<GlobSet>,
}

impl FileFinder {
    pub fn new(exclude: &[String]) -> Result<Self, LinterError> {
        Ok(Self {
            exclude_globs: Self::build_globset(exclude)?,
        })
    }

    fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>, LinterError> {
        if patterns.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| LinterError::config(format!("Invalid glob pattern: {}", e)))?;
            builder.add(glob);
        }

        let globset = builder
            .build()
            .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))?;

        Ok(Some(globset))
    }

    /// Checks if a path (relative to the walk root) is excluded.
    pub fn should_ignore(&self, path: &Path) -> bool {
        self.exclude_globs
            .as_ref()
            .is_some_and(|excludes| excludes.is_match(path))
    }

    /// Returns files matching `patterns` under `base_dir`, sorted and de-duplicated.
    ///
    /// A pattern naming an existing file is taken as is; everything else is
    /// a glob matched against paths relative to `base_dir`.
    pub fn discover_files(
        &self,
        patterns: &[String],
        base_dir: &Path,
    ) -> Result<Vec<PathBuf>, LinterError> {
        let mut files = Vec::new();

        let mut glob_builder = GlobSetBuilder::new();
        let mut has_globs = false;

        for pattern in patterns {
            let path = base_dir.join(pattern);
            if path
                .symlink_metadata()
                .is_ok_and(|m| m.file_type().is_file())
            {
                if !self.should_ignore(Path::new(pattern)) {
                    files.push(path);
                }
            } else {
                let glob = Glob::new(pattern).map_err(|e| {
                    LinterError::config(format!("Invalid pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
                has_globs = true;
            }
        }

        if has_globs {
            let glob_set = glob_builder
                .build()
                .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))?;

            for entry in WalkDir::new(base_dir).into_iter().filter_map(|e| e.ok()) {
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.path();
                let relative = path.strip_prefix(base_dir).unwrap_or(path);
                if glob_set.is_match(relative) && !self.should_ignore(relative) {
                    files.push(path.to_path_buf());
                }
            }
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to lint", files.len());
        Ok(files)
    }
}
