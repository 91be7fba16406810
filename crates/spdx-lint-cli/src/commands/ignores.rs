//! Ignores command implementation.

use spdx_lint_core::DEFAULT_IGNORED_SEGMENTS;

/// Runs the ignores command.
pub fn run() {
    println!("Ignored path segments:\n");
    println!("{:<14} Description", "Segment");
    println!("{}", "-".repeat(50));

    for segment in DEFAULT_IGNORED_SEGMENTS {
        println!("{:<14} {}", segment, describe(segment));
    }

    println!("\nA file is skipped when any of these appears as an exact");
    println!("path segment below the scan root.");
}

fn describe(segment: &str) -> &'static str {
    match segment {
        ".git" => "version-control metadata",
        "target" => "build output",
        ".cache" => "build cache",
        "LICENSE" => "license text file",
        "third-party" => "vendored third-party code",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_segment_has_a_description() {
        for segment in DEFAULT_IGNORED_SEGMENTS {
            assert!(
                !describe(segment).is_empty(),
                "no description for {segment}"
            );
        }
    }
}
