//! Error types for extloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning and counting.
///
/// Every error is fatal to the scan that produced it: a silently skipped
/// file or subtree would corrupt the totals without any indication, so the
/// policy is to abort and surface the offending path instead.
#[derive(Error, Debug)]
pub enum ExtlocError {
    /// Scan root does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Scan root is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A path could not be listed during traversal
    #[error("cannot access '{path}': {source}")]
    Access {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// A file could not be opened or fully read
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
