//! The process heap: a bump arena that never frees.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use bumpalo::Bump;
use hashbrown::HashMap;

use crate::Str;

/// Allocations at or below this size are deduplicated through the intern
/// table. In a heap that never frees, duplicate short strings are the bulk
/// of the garbage generated code produces.
const INTERN_CAP: usize = 64;

/// Process-wide string heap.
///
/// Every allocation is a copy into a bump arena that lives until process
/// exit; the footprint only grows. There is no free operation, exposed or
/// internal. Out-of-memory goes through the global allocation error path and
/// aborts the process.
///
/// Only the bump pointer and the intern table need a lock; the values handed
/// out are immutable, so concurrent readers never synchronize.
pub struct Heap {
    bump: Mutex<Bump>,
    interned: Mutex<HashMap<&'static str, Str, ahash::RandomState>>,
}

impl Heap {
    /// The one heap of this process. Lives in a `static` and is never
    /// dropped, which is what makes the `'static` lifetime of every [`Str`]
    /// sound.
    pub fn process() -> &'static Heap {
        static HEAP: OnceLock<Heap> = OnceLock::new();
        HEAP.get_or_init(Heap::new)
    }

    fn new() -> Self {
        Self {
            bump: Mutex::new(Bump::new()),
            interned: Mutex::new(HashMap::with_hasher(ahash::RandomState::new())),
        }
    }

    /// Copy `s` into the heap and return a handle valid for the rest of the
    /// process. Small strings are interned, so equal content may come back
    /// as the same handle; callers may only rely on content equality.
    pub fn alloc_str(&self, s: &str) -> Str {
        if s.is_empty() {
            return Str::EMPTY;
        }
        if s.len() <= INTERN_CAP {
            let mut interned = lock(&self.interned);
            if let Some(&found) = interned.get(s) {
                return found;
            }
            let copied = self.copy_in(s);
            interned.insert(copied.as_str(), copied);
            return copied;
        }
        self.copy_in(s)
    }

    /// Total bytes handed out so far. Monotonically non-decreasing.
    pub fn allocated_bytes(&self) -> usize {
        lock(&self.bump).allocated_bytes()
    }

    fn copy_in(&self, s: &str) -> Str {
        let bump = lock(&self.bump);
        let copied = bump.alloc_str(s);
        // The arena lives in a never-dropped static, so the allocation
        // outlives every borrow of it.
        let copied: &'static str = unsafe { &*(copied as *const str) };
        Str::from_heap(copied)
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_alloc_is_the_empty_handle() {
        let s = Heap::process().alloc_str("");
        assert_eq!(s, Str::EMPTY);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn small_strings_intern_to_one_handle() {
        let a = Heap::process().alloc_str("probe");
        let b = Heap::process().alloc_str("probe");
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
    }

    #[test]
    fn large_strings_still_compare_equal() {
        let big = "x".repeat(INTERN_CAP + 1);
        let a = Heap::process().alloc_str(&big);
        let b = Heap::process().alloc_str(&big);
        assert_eq!(a, b);
        assert_eq!(a.as_str(), big);
    }
}
