//! # extloclib
//!
//! A concurrent source-line counter library that classifies every line of a
//! directory tree as code, comment, or blank, and aggregates the counts per
//! file extension.
//!
//! ## Overview
//!
//! The pipeline has four stages:
//!
//! - **Scanner**: walks the tree, pruning ignored names and filtering by
//!   extension, and produces the candidate file list
//! - **Classifier**: decides blank / comment / code for a single line using
//!   a configurable set of comment-prefix tokens
//! - **Analyzer**: streams one file through the classifier into a per-file
//!   tally
//! - **Engine**: fans candidates out to a fixed pool of worker threads and
//!   merges their tallies at a single aggregation point
//!
//! Comment detection is a prefix heuristic, not a parser: a line whose
//! trimmed text starts with a configured token (default `//`) counts as a
//! comment, even inside a string literal.
//!
//! ## Example
//!
//! ```rust
//! use extloclib::{scan_directory, ScanConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.go"), "package main\n\n// hello\nx := 1\n").unwrap();
//!
//! let config = ScanConfig::new().ignore_names(vec!["vendor".into()]);
//! let result = scan_directory(dir.path(), &config, None).unwrap();
//!
//! let go = &result.extensions["go"];
//! assert_eq!(go.files, 1);
//! assert_eq!(go.code_lines, 2);
//! assert_eq!(go.comment_lines, 1);
//! ```

pub mod analyzer;
pub mod classify;
pub mod config;
pub mod counter;
pub mod engine;
pub mod error;
pub mod scanner;
pub mod stats;

pub use analyzer::analyze_file;
pub use classify::{classify, LineKind};
pub use config::{ScanConfig, DEFAULT_COMMENT_TOKEN};
pub use counter::scan_directory;
pub use error::ExtlocError;
pub use scanner::{discover_files, extension_of};
pub use stats::{ExtensionTotals, FileTally, ScanResult};

/// Result type for extloclib operations
pub type Result<T> = std::result::Result<T, ExtlocError>;
