//! Candidate discovery: directory traversal with name and extension filters.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::ExtlocError;
use crate::Result;

/// Extension of a path: the substring after the last `.` in its base name,
/// lowercased. `None` when the name has no dot or nothing after it.
///
/// Unlike [`Path::extension`], a leading dot counts, so `.gitignore` has
/// the extension `gitignore`.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let idx = name.rfind('.')?;
    let ext = &name[idx + 1..];
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Discover candidate files under `root`.
///
/// Performs a depth-first walk. An entry whose base name is in the ignore
/// set is skipped; for a directory that prunes the entire subtree, for a
/// plain file it skips just that file. Directories are never candidates.
/// Files without an extension are skipped, and when the allow-list is
/// non-empty only listed extensions pass.
///
/// Traversal errors abort the scan: a partial walk would produce totals
/// that look complete but are not. Candidates come back in traversal
/// order; callers must not depend on it.
pub fn discover_files(root: impl AsRef<Path>, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(ExtlocError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ExtlocError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|e| {
        // The root itself is never filtered
        if e.depth() == 0 {
            return true;
        }
        let name = e.file_name().to_str().unwrap_or("");
        !config.is_ignored(name)
    });

    for entry in walker {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            ExtlocError::Access { path, source: err }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(ext) = extension_of(entry.path()) else {
            continue;
        };
        if !config.extension_allowed(&ext) {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}
