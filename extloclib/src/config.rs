//! Scan configuration.
//!
//! `ScanConfig` is an explicit value passed into the scan entry points. It
//! is read-only for the duration of a scan, so concurrent or repeated scans
//! with different settings are safe.

/// Comment prefix used when no tokens are configured.
pub const DEFAULT_COMMENT_TOKEN: &str = "//";

/// Configuration for one scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Base names (files or directories) to skip; a matching directory
    /// prunes its whole subtree
    pub ignore_names: Vec<String>,
    /// Extensions to include, without the leading dot (empty = every file
    /// that has a non-empty extension)
    pub extensions: Vec<String>,
    /// Comment-prefix tokens checked in order; never empty
    pub comment_tokens: Vec<String>,
}

impl ScanConfig {
    /// Create a config with no ignores, no extension filter, and the
    /// default comment token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base names to ignore.
    pub fn ignore_names(mut self, names: Vec<String>) -> Self {
        self.ignore_names = names;
        self
    }

    /// Set the extension allow-list. Entries are lowercased; an empty list
    /// accepts every file with a non-empty extension.
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.to_lowercase())
            .collect();
        self
    }

    /// Set the comment-prefix tokens. An empty list keeps the built-in
    /// default, so the token set is never empty.
    pub fn comment_tokens(mut self, tokens: Vec<String>) -> Self {
        if !tokens.is_empty() {
            self.comment_tokens = tokens;
        }
        self
    }

    /// Check whether a base name is in the ignore set.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_names.iter().any(|n| n == name)
    }

    /// Check whether an extension passes the allow-list. The extension is
    /// expected to be lowercased already (see [`crate::extension_of`]).
    pub fn extension_allowed(&self, ext: &str) -> bool {
        self.extensions.is_empty() || self.extensions.iter().any(|e| e == ext)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_names: Vec::new(),
            extensions: Vec::new(),
            comment_tokens: vec![DEFAULT_COMMENT_TOKEN.to_string()],
        }
    }
}
