//! Maps block-relative findings onto file lines and aggregates them.

use std::path::{Path, PathBuf};

use fencelint_rules::Finding;
use serde::Serialize;

use crate::ExtractedBlock;

/// A finding positioned in the original file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedFinding {
    #[serde(flatten)]
    pub finding: Finding,
    /// `block.absolute_line + finding.line_number`.
    pub line_in_file: usize,
    /// Error range start, or 1.
    pub column: usize,
}

/// All findings of one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockReport {
    pub file: PathBuf,
    pub block: ExtractedBlock,
    /// 1-based position of the block within its file's extraction order.
    pub block_index: usize,
    pub findings: Vec<MappedFinding>,
}

/// Per-file summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub block_count: usize,
}

/// Result of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Blocks with at least one finding, in file then extraction order.
    pub entries: Vec<BlockReport>,
    /// Every scanned file, in discovery order.
    pub files: Vec<FileSummary>,
    /// Blocks extracted across all files.
    pub total_blocks: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one file's blocks and mapped entries.
    pub fn push_file(&mut self, path: PathBuf, block_count: usize, entries: Vec<BlockReport>) {
        self.total_blocks += block_count;
        self.files.push(FileSummary { path, block_count });
        self.entries.extend(entries);
    }

    /// True if any block produced a finding.
    pub fn has_findings(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of findings across all entries.
    pub fn finding_count(&self) -> usize {
        self.entries.iter().map(|e| e.findings.len()).sum()
    }

    /// Files that contain at least one nested block.
    pub fn files_with_blocks(&self) -> impl Iterator<Item = &FileSummary> {
        self.files.iter().filter(|f| f.block_count > 0)
    }
}

/// Maps findings of each block into file coordinates.
///
/// `findings_per_block[i]` belongs to `blocks[i]`. Blocks without findings
/// produce no entry but still advance `block_index`.
pub fn map_file(
    file: &Path,
    blocks: &[ExtractedBlock],
    findings_per_block: Vec<Vec<Finding>>,
) -> Vec<BlockReport> {
    blocks
        .iter()
        .zip(findings_per_block)
        .enumerate()
        .filter(|(_, (_, findings))| !findings.is_empty())
        .map(|(idx, (block, findings))| BlockReport {
            file: file.to_path_buf(),
            block: block.clone(),
            block_index: idx + 1,
            findings: findings
                .into_iter()
                .map(|finding| MappedFinding {
                    line_in_file: block.absolute_line + finding.line_number,
                    column: finding.column().unwrap_or(1),
                    finding,
                })
                .collect(),
        })
        .collect()
}
