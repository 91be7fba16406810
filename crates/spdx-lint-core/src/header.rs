//! Marker constant and first-line inspection.

/// The marker substring whose presence satisfies the check.
///
/// Only presence is tested; the license expression after the colon is not
/// validated.
pub const MARKER: &str = "SPDX-License-Identifier: ";

/// Prefix identifying an interpreter directive line.
const SHEBANG: &str = "#!";

/// Returns the line that must carry the marker.
///
/// This is the first line of `content`, unless that line is a shebang, in
/// which case the second line. A file with no such line (empty file, or a
/// shebang with nothing after it) yields the empty string.
#[must_use]
pub fn line_under_test(content: &str) -> &str {
    let mut lines = content.lines();
    match lines.next() {
        Some(first) if first.starts_with(SHEBANG) => lines.next().unwrap_or(""),
        Some(first) => first,
        None => "",
    }
}

/// Checks whether `line` contains the marker substring.
#[must_use]
pub fn has_marker(line: &str) -> bool {
    line.contains(MARKER)
}
