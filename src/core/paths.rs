//! Path normalization utilities
//!
//! Ensures all document paths use '/' as separator and are relative to a root,
//! and defines the one ordering used for documents.

use std::cmp::Ordering;
use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
///
/// Only Windows treats '\\' as a separator; elsewhere it is a legal file name
/// character and is kept.
#[cfg(windows)]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(not(windows))]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Order two normalized relative paths segment by segment.
///
/// Each '/'-separated segment is compared as bytes, so `a/b.md` sorts before
/// `a-c.md` even though '-' < '/' in a plain string comparison.
pub fn path_order(a: &str, b: &str) -> Ordering {
    a.split('/').cmp(b.split('/'))
}
