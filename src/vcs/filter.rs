//! Include filter for changed files.

use crate::error::{LintDiffError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Decides which changed files are handed to the linter.
///
/// A file is kept when it still exists on disk and matches at least one
/// include glob. With no globs, every existing file is kept.
#[derive(Debug, Clone)]
pub struct IncludeFilter {
    globs: GlobSet,
    empty: bool,
}

impl IncludeFilter {
    /// Build a filter from glob patterns (e.g. `*.py`).
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut empty = true;

        for pattern in patterns {
            let normalized = pattern.trim().replace('\\', "/");
            if normalized.is_empty() {
                continue;
            }
            let glob = Glob::new(&normalized).map_err(|e| {
                LintDiffError::UserError(format!("invalid include pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
            empty = false;
        }

        let globs = builder
            .build()
            .map_err(|e| LintDiffError::UserError(format!("invalid include patterns: {}", e)))?;

        Ok(Self { globs, empty })
    }

    /// Returns true if the path (relative to `root`) should be linted.
    pub fn accepts(&self, root: &Path, path: &str) -> bool {
        if !root.join(path).is_file() {
            return false;
        }
        self.empty || self.globs.is_match(path)
    }
}
