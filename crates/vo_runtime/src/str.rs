//! Immutable string handles with process lifetime.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A handle to an immutable UTF-8 string owned by the process heap.
///
/// `Str` is `Copy` and has no destructor; once a value exists it stays valid
/// and unchanged until process exit. Freeing one is not a silent no-op, it is
/// unrepresentable.
///
/// Equality, ordering into maps, and display all go by content. Two handles
/// with equal content may or may not share storage.
#[derive(Clone, Copy)]
pub struct Str {
    text: &'static str,
}

impl Str {
    pub const EMPTY: Str = Str { text: "" };

    /// Wrap a Rust string literal without copying; a `&'static str` already
    /// has process lifetime. This is the form generated code uses for its
    /// constant pool.
    pub const fn literal(text: &'static str) -> Str {
        Str { text }
    }

    pub(crate) const fn from_heap(text: &'static str) -> Str {
        Str { text }
    }

    pub fn as_str(&self) -> &'static str {
        self.text
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn ends_with(&self, c: char) -> bool {
        self.text.ends_with(c)
    }
}

impl PartialEq for Str {
    fn eq(&self, other: &Str) -> bool {
        self.text == other.text
    }
}

impl Eq for Str {}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl Hash for Str {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.text, f)
    }
}
