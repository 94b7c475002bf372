//! Result data model: per-file tallies and per-extension totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Line counts for a single analyzed file.
///
/// Owned by the worker that produced it until merged. Blank lines are
/// tracked so that `code + comments + blank` equals the file's total line
/// count, but they are excluded from aggregated totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTally {
    /// Lowercased extension without the leading dot
    pub extension: String,
    /// Lines classified as code
    pub code_lines: u64,
    /// Lines classified as comments
    pub comment_lines: u64,
    /// Whitespace-only lines
    pub blank_lines: u64,
}

impl FileTally {
    /// Create an empty tally for the given extension.
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            ..Self::default()
        }
    }

    /// Total lines in the file.
    pub fn total_lines(&self) -> u64 {
        self.code_lines + self.comment_lines + self.blank_lines
    }
}

/// Running sums for one extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionTotals {
    /// Number of files merged into these totals
    pub files: u64,
    /// Sum of code lines
    pub code_lines: u64,
    /// Sum of comment lines
    pub comment_lines: u64,
}

impl ExtensionTotals {
    /// Fold one file tally into the running sums.
    pub fn merge(&mut self, tally: &FileTally) {
        self.files += 1;
        self.code_lines += tally.code_lines;
        self.comment_lines += tally.comment_lines;
    }
}

/// Aggregated scan result, keyed by extension.
///
/// Built incrementally by the engine's single aggregation point and
/// immutable once a scan completes. The map is a `BTreeMap` so iteration
/// is already sorted by extension name, which is the order the renderers
/// want. Merging is pure summation, so the final totals are identical for
/// any order of merges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Per-extension totals
    pub extensions: BTreeMap<String, ExtensionTotals>,
}

impl ScanResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one file tally, creating the extension entry on first use.
    pub fn merge(&mut self, tally: &FileTally) {
        self.extensions
            .entry(tally.extension.clone())
            .or_default()
            .merge(tally);
    }

    /// True when no files were merged.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Total files across all extensions.
    pub fn total_files(&self) -> u64 {
        self.extensions.values().map(|t| t.files).sum()
    }

    /// Total code lines across all extensions.
    pub fn total_code(&self) -> u64 {
        self.extensions.values().map(|t| t.code_lines).sum()
    }

    /// Total comment lines across all extensions.
    pub fn total_comments(&self) -> u64 {
        self.extensions.values().map(|t| t.comment_lines).sum()
    }
}
