//! Path-segment ignore filter.

use std::path::{Component, Path};

/// Path segments exempt from checking by default.
///
/// In order: version-control metadata, build output, build cache, the
/// license text file itself, vendored third-party code.
pub const DEFAULT_IGNORED_SEGMENTS: &[&str] =
    &[".git", "target", ".cache", "LICENSE", "third-party"];

/// The set of path segments whose entries are exempt from the scan.
///
/// Matching is exact segment equality, never substring matching on the
/// whole path: `a/third-party/b.rs` is ignored, `a/thirdpartyfoo/b.rs` is
/// not.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    segments: Vec<String>,
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self {
            segments: DEFAULT_IGNORED_SEGMENTS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl IgnoreSet {
    /// Creates the built-in ignore set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment to the set.
    pub fn add(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Returns the segments in the set, in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Checks whether `segment` is in the set.
    #[must_use]
    pub fn contains(&self, segment: &str) -> bool {
        self.segments.iter().any(|s| s == segment)
    }

    /// Checks whether any segment of `relative` is in the set.
    ///
    /// `relative` must be a path below the scan root; the root itself (and
    /// anything above it) is never consulted, so a root directory named
    /// like an ignored segment is still scanned.
    #[must_use]
    pub fn matches_path(&self, relative: &Path) -> bool {
        relative.components().any(|c| {
            if let Component::Normal(s) = c {
                s.to_str().is_some_and(|s| self.contains(s))
            } else {
                false
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_carries_the_builtin_segments() {
        let set = IgnoreSet::new();
        for segment in DEFAULT_IGNORED_SEGMENTS {
            assert!(set.contains(segment), "missing builtin segment {segment}");
        }
    }

    #[test]
    fn matches_exact_segment_anywhere_in_path() {
        let set = IgnoreSet::new();
        assert!(set.matches_path(Path::new(".git/config")));
        assert!(set.matches_path(Path::new("a/third-party/b.rs")));
        assert!(set.matches_path(Path::new("deep/nested/target/debug/out.rs")));
    }

    #[test]
    fn substring_of_a_segment_is_not_a_match() {
        let set = IgnoreSet::new();
        assert!(!set.matches_path(Path::new("a/thirdpartyfoo/b.rs")));
        assert!(!set.matches_path(Path::new("retarget/main.rs")));
        assert!(!set.matches_path(Path::new("LICENSES/MIT.txt")));
    }

    #[test]
    fn leaf_file_names_match_too() {
        let set = IgnoreSet::new();
        assert!(set.matches_path(Path::new("LICENSE")));
        assert!(set.matches_path(Path::new("docs/LICENSE")));
    }

    #[test]
    fn added_segments_extend_the_set() {
        let mut set = IgnoreSet::new();
        assert!(!set.matches_path(Path::new("vendor/lib.rs")));
        set.add("vendor");
        assert!(set.matches_path(Path::new("vendor/lib.rs")));
    }
}
