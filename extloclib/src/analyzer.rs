//! Per-file analysis: stream a file line by line through the classifier.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::classify::{classify, LineKind};
use crate::config::ScanConfig;
use crate::error::ExtlocError;
use crate::scanner::extension_of;
use crate::stats::FileTally;
use crate::Result;

/// Analyze one file and produce its tally.
///
/// The file is read as newline-delimited text with no assumption about a
/// trailing newline. Open failures and mid-stream read errors both surface
/// as [`ExtlocError::FileRead`]; a partial tally is never returned. The
/// handle is released on every exit path.
pub fn analyze_file(path: impl AsRef<Path>, config: &ScanConfig) -> Result<FileTally> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| ExtlocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = extension_of(path).unwrap_or_default();
    let mut tally = FileTally::new(extension);

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| ExtlocError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        match classify(&line, &config.comment_tokens) {
            LineKind::Blank => tally.blank_lines += 1,
            LineKind::Comment => tally.comment_lines += 1,
            LineKind::Code => tally.code_lines += 1,
        }
    }

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_analyze_counts_code_comments_and_blanks() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.go");
        fs::write(&path, "package main\n\n// hello\nx := 1\n").unwrap();

        let tally = analyze_file(&path, &ScanConfig::new()).unwrap();

        assert_eq!(tally.extension, "go");
        assert_eq!(tally.code_lines, 2);
        assert_eq!(tally.comment_lines, 1);
        assert_eq!(tally.blank_lines, 1);
        assert_eq!(tally.total_lines(), 4);
    }

    #[test]
    fn test_analyze_no_trailing_newline() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("b.rs");
        fs::write(&path, "fn main() {}\n// done").unwrap();

        let tally = analyze_file(&path, &ScanConfig::new()).unwrap();

        assert_eq!(tally.code_lines, 1);
        assert_eq!(tally.comment_lines, 1);
    }

    #[test]
    fn test_analyze_empty_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.go");
        fs::write(&path, "").unwrap();

        let tally = analyze_file(&path, &ScanConfig::new()).unwrap();

        assert_eq!(tally.total_lines(), 0);
    }

    #[test]
    fn test_analyze_custom_tokens() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("script.py");
        fs::write(&path, "# comment\nprint('hi')\n// not a python comment\n").unwrap();

        let config = ScanConfig::new().comment_tokens(vec!["#".into()]);
        let tally = analyze_file(&path, &config).unwrap();

        assert_eq!(tally.comment_lines, 1);
        assert_eq!(tally.code_lines, 2);
    }

    #[test]
    fn test_analyze_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vanished.go");

        let err = analyze_file(&path, &ScanConfig::new()).unwrap_err();

        match err {
            ExtlocError::FileRead { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected FileRead, got {other:?}"),
        }
    }
}
