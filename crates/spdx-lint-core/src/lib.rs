//! # spdx-lint-core
//!
//! Engine for verifying that every file in a source tree carries an SPDX
//! license identifier on its first non-shebang line.
//!
//! This crate provides:
//!
//! - [`Checker`] for walking a tree and collecting violations
//! - [`IgnoreSet`] for exempting path segments from the scan
//! - [`ScanReport`] for reporting results
//!
//! ## Example
//!
//! ```ignore
//! use spdx_lint_core::Checker;
//!
//! let report = Checker::builder().root("./src").build().scan()?;
//! report.print_report();
//! assert!(!report.has_violations());
//! ```
//!
//! ## `cargo test` integration
//!
//! ```rust,ignore
//! // tests/license_headers.rs
//! #[test]
//! fn every_file_carries_an_spdx_identifier() {
//!     let report = spdx_lint_core::Checker::builder()
//!         .build()
//!         .scan()
//!         .unwrap();
//!     assert!(!report.has_violations(), "{}", report.format_test_report());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod header;
mod ignore;
mod types;

pub use checker::{Checker, CheckerBuilder, CheckerError};
pub use header::{has_marker, line_under_test, MARKER};
pub use ignore::{IgnoreSet, DEFAULT_IGNORED_SEGMENTS};
pub use types::{ScanReport, Violation};

/// Scans `root` with the built-in ignore set, prints the report to stdout,
/// and returns whether any checked file lacked the marker.
///
/// # Errors
///
/// Returns an error if traversal fails or any file cannot be read.
pub fn check_tree(root: impl Into<std::path::PathBuf>) -> Result<bool, CheckerError> {
    Checker::builder().root(root).build().check()
}
