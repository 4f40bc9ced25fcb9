//! Existence probes against the host filesystem.

use vo_runtime::Str;

use crate::fs::{FileSystem, StdFileSystem};

/// True when the host filesystem has an entry at `path`.
///
/// `stat`-style semantics: symlinks are followed, so a dangling link does
/// not exist. Anything that prevents confirming existence, including
/// permission denied on a parent directory or a malformed path, reads as
/// `false`. Never panics.
pub fn exists(path: Str) -> bool {
    exists_with(&StdFileSystem, path)
}

/// [`exists`] against an injected [`FileSystem`].
pub fn exists_with(fs: &dyn FileSystem, path: Str) -> bool {
    fs.metadata(path.as_str()).is_ok()
}
