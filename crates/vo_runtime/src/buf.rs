//! Growable builder that seals into a heap-owned string.

use crate::{Heap, Str};

/// Accumulates pieces of output before committing them to the heap.
///
/// The scratch storage is transient; only the sealed result of [`finish`]
/// is owned by the runtime. This keeps the never-freeing heap clear of
/// intermediate states that generated string concatenation would otherwise
/// pin forever.
///
/// [`finish`]: Buf::finish
pub struct Buf {
    data: String,
}

impl Buf {
    pub fn new() -> Self {
        Self {
            data: String::new(),
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.data.push_str(s);
    }

    pub fn push_char(&mut self, c: char) {
        self.data.push(c);
    }

    pub fn push_i64(&mut self, i: i64) {
        let mut buf = itoa::Buffer::new();
        self.data.push_str(buf.format(i));
    }

    pub fn push_f64(&mut self, f: f64) {
        let mut buf = ryu::Buffer::new();
        self.data.push_str(buf.format(f));
    }

    pub fn push_bool(&mut self, b: bool) {
        self.data.push_str(if b { "true" } else { "false" });
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Seal the accumulated bytes into the process heap.
    pub fn finish(self) -> Str {
        Heap::process().alloc_str(&self.data)
    }
}

impl Default for Buf {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pieces_seal_in_order() {
        let mut b = Buf::new();
        b.push_str("n=");
        b.push_i64(-7);
        b.push_char(' ');
        b.push_bool(true);
        assert_eq!(b.finish(), "n=-7 true");
    }

    #[test]
    fn empty_buf_seals_to_empty() {
        let b = Buf::new();
        assert!(b.is_empty());
        assert_eq!(b.finish(), Str::EMPTY);
    }
}
