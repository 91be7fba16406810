//! Checker engine orchestrating the scan.

use crate::header;
use crate::ignore::IgnoreSet;
use crate::types::{ScanReport, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Errors that can occur during a scan.
///
/// Every variant is fatal: a scan that cannot read what it set out to read
/// aborts instead of producing a silently incomplete report.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// Traversal failure, including a nonexistent or unreadable root.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A file that could not be opened, read, or decoded as UTF-8.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Builder for configuring a [`Checker`].
#[derive(Debug, Default)]
pub struct CheckerBuilder {
    root: Option<PathBuf>,
    ignores: IgnoreSet,
}

impl CheckerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to scan (default: current directory).
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a path segment to the ignore set, on top of the built-in ones.
    #[must_use]
    pub fn ignore_segment(mut self, segment: impl Into<String>) -> Self {
        self.ignores.add(segment);
        self
    }

    /// Builds the checker.
    #[must_use]
    pub fn build(self) -> Checker {
        Checker {
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            ignores: self.ignores,
        }
    }
}

/// Walks a tree and checks every non-ignored file for the SPDX marker.
///
/// Use [`Checker::builder()`] to construct an instance.
#[derive(Debug)]
pub struct Checker {
    root: PathBuf,
    ignores: IgnoreSet,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the root directory being scanned.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the ignore set in effect.
    #[must_use]
    pub fn ignores(&self) -> &IgnoreSet {
        &self.ignores
    }

    /// Scans the tree and returns the accumulated report.
    ///
    /// Entries are visited sorted by file name at every level, so reporting
    /// order is stable across runs on an unmodified tree. Ignored segments
    /// prune the walk: files below them are never opened or counted.
    ///
    /// # Errors
    ///
    /// Returns an error if traversal fails or any surviving file cannot be
    /// read; the scan aborts on the first such failure.
    pub fn scan(&self) -> Result<ScanReport, CheckerError> {
        info!("Scanning {:?}", self.root);

        let mut report = ScanReport::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = self.relative_path(&entry);
            debug!("Checking: {}", relative.display());

            let content =
                std::fs::read_to_string(entry.path()).map_err(|e| CheckerError::Io {
                    path: entry.path().to_path_buf(),
                    source: e,
                })?;
            report.files_checked += 1;

            if !header::has_marker(header::line_under_test(&content)) {
                report.violations.push(Violation::new(relative));
            }
        }

        info!(
            "Scan complete: {} violation(s) in {} file(s)",
            report.violations.len(),
            report.files_checked
        );

        Ok(report)
    }

    /// Scans the tree, prints the report to stdout, and returns whether any
    /// checked file lacked the marker.
    ///
    /// # Errors
    ///
    /// Returns an error if traversal fails or any surviving file cannot be
    /// read.
    pub fn check(&self) -> Result<bool, CheckerError> {
        let report = self.scan()?;
        report.print_report();
        Ok(report.has_violations())
    }

    /// Whether the walker should skip this entry and its subtree.
    ///
    /// Judged on the path relative to the root, so the root's own name
    /// never matches the ignore set.
    fn is_ignored(&self, entry: &DirEntry) -> bool {
        let ignored = self.ignores.matches_path(&self.relative_path(entry));
        if ignored {
            debug!("Ignoring: {}", entry.path().display());
        }
        ignored
    }

    fn relative_path(&self, entry: &DirEntry) -> PathBuf {
        entry
            .path()
            .strip_prefix(&self.root)
            .map_or_else(|_| entry.path().to_path_buf(), Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_current_dir() {
        let checker = Checker::builder().build();
        assert_eq!(checker.root(), Path::new("."));
    }

    #[test]
    fn builder_extends_the_ignore_set() {
        let checker = Checker::builder().ignore_segment("vendor").build();
        assert!(checker.ignores().contains("vendor"));
        assert!(checker.ignores().contains(".git"));
    }

    #[test]
    fn scan_of_missing_root_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("does-not-exist");
        let result = Checker::builder().root(missing).build().scan();
        assert!(matches!(result, Err(CheckerError::Walk(_))));
    }

    #[test]
    fn root_named_like_an_ignored_segment_is_still_scanned() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join("target");
        std::fs::create_dir(&root).expect("create root");
        std::fs::write(root.join("a.rs"), "// no marker\n").expect("write file");

        let report = Checker::builder().root(&root).build().scan().expect("scan");
        assert_eq!(report.files_checked, 1);
        assert!(report.has_violations());
    }
}
