//! spdx-lint CLI tool.
//!
//! Usage:
//! ```bash
//! spdx-lint check [PATH]
//! spdx-lint ignores
//! ```
//!
//! Invoked with no arguments, checks the current working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

/// Checks that every file in a source tree carries an SPDX license identifier
#[derive(Parser)]
#[command(name = "spdx-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a tree for missing SPDX identifiers
    Check {
        /// Root directory to scan (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List the built-in ignored path segments
    Ignores,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    // Diagnostics go to stderr; stdout carries only the violation report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Check { path }) => commands::check::run(&path),
        Some(Commands::Ignores) => {
            commands::ignores::run();
            Ok(())
        }
        // Bare invocation checks the current working directory
        None => commands::check::run(Path::new(".")),
    }
}
