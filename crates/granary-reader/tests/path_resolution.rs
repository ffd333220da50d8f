//! Property tests for explicit file-path resolution.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use granary_reader::{ReaderError, resolve_file_paths};

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9_]{0,7}", 1..4)
}

proptest! {
    #[test]
    fn relative_paths_resolve_under_the_root(segments in segments()) {
        let rel: PathBuf = segments.iter().collect();
        let root = Path::new("/data/input");

        let resolved = resolve_file_paths(&[rel.clone()], Some(root)).unwrap();

        prop_assert_eq!(resolved.len(), 1);
        prop_assert!(resolved[0].starts_with(root));
        prop_assert!(resolved[0].ends_with(&rel));
    }

    #[test]
    fn absolute_paths_under_the_root_pass_through(segments in segments()) {
        let root = Path::new("/data/input");
        let file = root.join(segments.iter().collect::<PathBuf>());

        let resolved = resolve_file_paths(&[file.clone()], Some(root)).unwrap();

        prop_assert_eq!(resolved, vec![file]);
    }

    #[test]
    fn relative_paths_without_a_root_are_rejected(segments in segments()) {
        let rel: PathBuf = segments.iter().collect();

        let err = resolve_file_paths(&[rel], None).unwrap_err();

        let is_expected = matches!(err, ReaderError::RelativePathWithoutRoot { .. });
        prop_assert!(is_expected, "unexpected error: {err:?}");
    }

    #[test]
    fn absolute_paths_outside_the_root_are_rejected(segments in segments()) {
        let root = Path::new("/data/input");
        let file = Path::new("/elsewhere").join(segments.iter().collect::<PathBuf>());

        let err = resolve_file_paths(&[file], Some(root)).unwrap_err();

        let is_expected = matches!(err, ReaderError::PathOutsideRoot { .. });
        prop_assert!(is_expected, "unexpected error: {err:?}");
    }
}
