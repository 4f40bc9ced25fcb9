//! Filesystem capability seam.

/// The one filesystem question this crate asks the platform. Injectable so
/// tests can answer it without touching the host.
pub trait FileSystem {
    fn metadata(&self, path: &str) -> Result<(), String>;
}

pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn metadata(&self, path: &str) -> Result<(), String> {
        std::fs::metadata(path)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
