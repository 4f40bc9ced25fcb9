use proptest::prelude::*;
use vo_pathlib::os_path::rstrip_slashes;
use vo_runtime::Heap;

proptest! {
    #[test]
    fn unchanged_without_trailing_slash(s in ".*") {
        prop_assume!(!s.ends_with('/'));
        let p = Heap::process().alloc_str(&s);
        prop_assert_eq!(rstrip_slashes(p), p);
    }

    #[test]
    fn idempotent(s in ".*") {
        let p = Heap::process().alloc_str(&s);
        let once = rstrip_slashes(p);
        prop_assert_eq!(rstrip_slashes(once), once);
    }

    #[test]
    fn result_is_a_prefix_with_no_trailing_slash(s in ".*") {
        let p = Heap::process().alloc_str(&s);
        let out = rstrip_slashes(p);
        prop_assert!(s.starts_with(out.as_str()));
        prop_assert!(out.is_empty() || !out.ends_with('/'));
        // Everything trimmed was a separator.
        prop_assert!(s[out.len()..].chars().all(|c| c == '/'));
    }
}
