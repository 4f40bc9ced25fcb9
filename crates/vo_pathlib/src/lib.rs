//! Path helpers for vo-generated code.
//!
//! Drop-in replacements for the pieces of the source language's standard
//! path module that generated programs call. Strings flow through the leaky
//! heap in `vo_runtime`; this crate never manages memory lifetime itself.

mod fs;
pub mod os_path;
pub mod path_stat;

pub use fs::{FileSystem, StdFileSystem};
