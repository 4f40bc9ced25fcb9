//! Pure path-string transforms.

use vo_runtime::{Heap, Str};

/// Return `path` with every trailing `/` removed.
///
/// A path of nothing but separators trims to the empty string. Interior
/// separators are untouched. When nothing trims, the input handle comes back
/// as-is; callers get content equality, not a fresh allocation.
pub fn rstrip_slashes(path: Str) -> Str {
    if !path.ends_with('/') {
        return path;
    }
    let trimmed = path.as_str().trim_end_matches('/');
    if trimmed.is_empty() {
        Str::EMPTY
    } else {
        Heap::process().alloc_str(trimmed)
    }
}
