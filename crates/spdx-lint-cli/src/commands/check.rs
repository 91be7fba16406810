//! Check command implementation.

use anyhow::{Context, Result};
use spdx_lint_core::Checker;
use std::path::Path;

/// Runs the check command.
pub fn run(path: &Path) -> Result<()> {
    let checker = Checker::builder().root(path).build();

    tracing::info!("Checking {:?}", path);

    let report = checker
        .scan()
        .with_context(|| format!("Failed to scan {}", path.display()))?;

    report.print_report();

    // Exit nonzero when any checked file lacks the marker
    if report.has_violations() {
        std::process::exit(1);
    }

    Ok(())
}
