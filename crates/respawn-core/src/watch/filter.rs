//! Fixed directory exclusions.
//!
//! Dependency caches and VCS metadata churn constantly while a project is
//! being worked on; watching them would restart the command on every
//! `npm install` or `git status`.

use std::path::{Path, PathBuf};

/// Markers that exclude any path below the root containing them.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git"];

/// Decides which paths under a root belong to the watch set.
#[derive(Debug, Clone)]
pub struct WatchFilter {
    root: PathBuf,
}

impl WatchFilter {
    /// Create a filter for paths under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory the filter is relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns true if the part of `path` below the root contains one of
    /// [`EXCLUDED_DIRS`] anywhere, so `.github` and `node_modules_cache` are
    /// excluded along with `.git` and `node_modules`.
    ///
    /// The root itself is stripped first, so a project that lives somewhere
    /// under e.g. `~/.git-projects` is unaffected.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let rel = rel.to_string_lossy();
        EXCLUDED_DIRS.iter().any(|marker| rel.contains(marker))
    }

    /// Inverse of [`is_excluded`](Self::is_excluded).
    pub fn admits(&self, path: &Path) -> bool {
        !self.is_excluded(path)
    }
}
