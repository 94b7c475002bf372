//! High-level counting API.
//!
//! This module provides the main entry point for counting lines in a
//! directory tree: discovery, then the concurrent analysis pipeline.

use std::path::Path;

use crate::config::ScanConfig;
use crate::engine;
use crate::scanner::discover_files;
use crate::stats::ScanResult;
use crate::Result;

/// Scan a directory tree and aggregate line counts per extension.
///
/// `workers` is a hint for the analysis pool size; `None` uses one worker
/// per available CPU, minimum 1. The first file-system error aborts the
/// scan, so a returned result always reflects every candidate exactly
/// once.
///
/// # Example
///
/// ```rust,ignore
/// use extloclib::{scan_directory, ScanConfig};
///
/// let config = ScanConfig::new()
///     .ignore_names(vec!["vendor".into(), ".git".into()])
///     .extensions(vec!["go".into()]);
/// let result = scan_directory(".", &config, None)?;
/// for (ext, totals) in &result.extensions {
///     println!("{ext}: {} files, {} code", totals.files, totals.code_lines);
/// }
/// ```
pub fn scan_directory(
    root: impl AsRef<Path>,
    config: &ScanConfig,
    workers: Option<usize>,
) -> Result<ScanResult> {
    let candidates = discover_files(root, config)?;
    let worker_count = workers.unwrap_or_else(num_cpus::get);
    engine::run(candidates, config, worker_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtlocError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_single_go_file() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("a.go"),
            "package main\n\n// hello\nx := 1\n",
        )
        .unwrap();

        let result = scan_directory(temp.path(), &ScanConfig::new(), None).unwrap();

        assert_eq!(result.extensions.len(), 1);
        let go = &result.extensions["go"];
        assert_eq!(go.files, 1);
        assert_eq!(go.code_lines, 2);
        assert_eq!(go.comment_lines, 1);
    }

    #[test]
    fn test_ignored_subtree_contributes_nothing() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("vendor")).unwrap();
        fs::write(temp.path().join("vendor/b.go"), "x\n").unwrap();
        fs::write(temp.path().join("a.go"), "x\n").unwrap();

        let config = ScanConfig::new().ignore_names(vec!["vendor".into()]);
        let result = scan_directory(temp.path(), &config, None).unwrap();

        assert_eq!(result.extensions["go"].files, 1);
        assert_eq!(result.total_files(), 1);
    }

    #[test]
    fn test_extension_allow_list() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.go"), "x\n").unwrap();
        fs::write(temp.path().join("a.txt"), "y\n").unwrap();

        let config = ScanConfig::new().extensions(vec!["go".into()]);
        let result = scan_directory(temp.path(), &config, None).unwrap();

        assert!(result.extensions.contains_key("go"));
        assert!(!result.extensions.contains_key("txt"));
    }

    #[test]
    fn test_empty_directory_yields_empty_result() {
        let temp = tempdir().unwrap();
        let result = scan_directory(temp.path(), &ScanConfig::new(), None).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_missing_root_is_a_scan_error() {
        let result = scan_directory("/nonexistent/extloc/root", &ScanConfig::new(), None);
        assert!(matches!(result, Err(ExtlocError::PathNotFound(_))));
    }

    #[test]
    fn test_explicit_worker_hint() {
        let temp = tempdir().unwrap();
        for i in 0..6 {
            fs::write(temp.path().join(format!("f{i}.rs")), "fn f() {}\n").unwrap();
        }

        let result = scan_directory(temp.path(), &ScanConfig::new(), Some(3)).unwrap();
        assert_eq!(result.extensions["rs"].files, 6);
    }
}
