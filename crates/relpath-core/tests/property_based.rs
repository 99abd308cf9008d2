//! Property-based tests using proptest

use proptest::prelude::*;
use relpath_core::{
    BidirectionalIndexCache, Error, ErrorKind, InvalidPathReason, PathInterner, RelPath,
    SeparatorStyle,
};
use std::collections::HashSet;

// A single component that can never be "." or "..", including characters
// other platforms treat as separators or drive markers
fn arb_component() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9_:\\-][a-zA-Z0-9_.:\\-]{0,8}").expect("valid regex")
}

// Whether `WINDOWS` can write every component of `path` unchanged
fn windows_can_write(path: &RelPath) -> bool {
    path.components().enumerate().all(|(i, c)| {
        let b = c.as_bytes();
        let drive = b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':';
        !c.contains('\\') && !(i == 0 && drive)
    })
}

// Generate canonical path strings, including the empty path
fn arb_canonical() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_component(), 0..6).prop_map(|parts| parts.join("/"))
}

fn arb_nonempty_canonical() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_component(), 1..6).prop_map(|parts| parts.join("/"))
}

proptest! {
    #[test]
    fn test_canonical_strings_round_trip(s in arb_canonical()) {
        let path = RelPath::new(&s).unwrap();
        prop_assert_eq!(path.to_string(), s);
    }

    #[test]
    fn test_broken_paths_rejected(
        s in arb_nonempty_canonical(),
        bad in prop_oneof![
            Just("/"),
            Just("//"),
            Just("/./"),
            Just("/../"),
        ],
        leading in any::<bool>()
    ) {
        let broken = if leading { format!("{}{}", bad, s) } else { format!("{}{}", s, bad) };
        let err = RelPath::new(&broken).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidPath);
    }

    #[test]
    fn test_resolve_identities(s in arb_canonical()) {
        let path = RelPath::new(&s).unwrap();
        prop_assert_eq!(RelPath::empty().resolve(&path), path.clone());
        prop_assert_eq!(path.resolve(&RelPath::empty()), path);
    }

    #[test]
    fn test_resolve_then_strip(a in arb_canonical(), b in arb_canonical()) {
        let a = RelPath::new(&a).unwrap();
        let b = RelPath::new(&b).unwrap();
        let joined = a.resolve(&b);

        prop_assert!(joined.starts_with(&a));
        prop_assert_eq!(joined.strip_prefix(&a), Some(b.clone()));
        prop_assert_eq!(joined.component_count(), a.component_count() + b.component_count());
        // The join never needs revalidation to be canonical
        prop_assert_eq!(RelPath::new(joined.as_str()).unwrap(), joined);
    }

    #[test]
    fn test_dirname_and_name_recompose(s in arb_nonempty_canonical()) {
        let path = RelPath::new(&s).unwrap();
        prop_assert_eq!(path.dirname().resolve(&path.name()), path.clone());
        prop_assert_eq!(path.name().component_count(), 1);
    }

    #[test]
    fn test_textual_prefix_is_not_component_prefix(
        s in arb_nonempty_canonical(),
        suffix in "[a-z]{1,4}"
    ) {
        let prefix = RelPath::new(&s).unwrap();
        let longer = RelPath::new(&format!("{}{}", s, suffix)).unwrap();
        prop_assert!(!longer.starts_with(&prefix));
    }

    #[test]
    fn test_ordering_follows_strings(a in arb_canonical(), b in arb_canonical()) {
        let pa = RelPath::new(&a).unwrap();
        let pb = RelPath::new(&b).unwrap();
        prop_assert_eq!(pa.cmp(&pb), a.cmp(&b));
        prop_assert_eq!(pa == pb, a == b);
    }

    #[test]
    fn test_serde_round_trip(s in arb_canonical()) {
        let path = RelPath::new(&s).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: RelPath = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, path);
    }

    #[test]
    fn test_windows_style_round_trip(s in arb_canonical()) {
        let path = RelPath::new(&s).unwrap();
        match path.to_platform(&SeparatorStyle::WINDOWS) {
            Ok(native) => {
                prop_assert!(windows_can_write(&path));
                let back = RelPath::from_platform(&SeparatorStyle::WINDOWS, native.as_str());
                prop_assert_eq!(back.unwrap(), path);
            }
            Err(err) => {
                prop_assert!(!windows_can_write(&path));
                prop_assert!(matches!(
                    err,
                    Error::InvalidPath { reason: InvalidPathReason::Unrepresentable, .. }
                ), "unexpected error: {:?}", err);
            }
        }
    }

    #[test]
    fn test_posix_style_round_trip(s in arb_canonical()) {
        let path = RelPath::new(&s).unwrap();
        let native = path.to_platform(&SeparatorStyle::POSIX).unwrap();
        prop_assert_eq!(&native, &s);
        let back = RelPath::from_platform(&SeparatorStyle::POSIX, native.as_str());
        prop_assert_eq!(back.unwrap(), path);
    }

    #[test]
    fn test_native_round_trip(s in arb_canonical()) {
        let path = RelPath::new(&s).unwrap();
        match path.to_path_buf() {
            Ok(native) => prop_assert_eq!(RelPath::from_std_path(&native).unwrap(), path),
            Err(err) => {
                prop_assert!(cfg!(not(unix)));
                prop_assert_eq!(err.kind(), ErrorKind::InvalidPath);
            }
        }
    }

    #[test]
    fn test_interner_agrees_with_constructor(
        strings in prop::collection::vec(arb_canonical(), 1..50)
    ) {
        let interner = PathInterner::with_capacity(std::num::NonZeroUsize::new(8).unwrap());
        for s in &strings {
            prop_assert_eq!(interner.intern(s).unwrap(), RelPath::new(s).unwrap());
        }
        prop_assert!(interner.len() <= 8);
    }

    #[test]
    fn test_index_is_dense_and_stable(
        strings in prop::collection::vec(arb_canonical(), 1..100)
    ) {
        let index = BidirectionalIndexCache::new();
        let paths: Vec<RelPath> = strings.iter().map(|s| RelPath::new(s).unwrap()).collect();

        let first: Vec<_> = paths.iter().map(|p| index.get_index(p).unwrap()).collect();
        let second: Vec<_> = paths.iter().map(|p| index.get_index(p).unwrap()).collect();
        prop_assert_eq!(&first, &second);

        let distinct: HashSet<&RelPath> = paths.iter().collect();
        let assigned: HashSet<u32> = first.iter().map(|i| i.get()).collect();
        prop_assert_eq!(assigned, (0..distinct.len() as u32).collect::<HashSet<_>>());

        for (path, idx) in paths.iter().zip(first) {
            prop_assert_eq!(&index.get_by_index(idx).unwrap(), path);
        }
    }
}
