//! Property-based tests for repolyzer-walk.

use std::collections::BTreeSet;
use std::fs;

use proptest::prelude::*;
use repolyzer_exclude::ExclusionSet;
use repolyzer_walk::{TreeWalker, normalize_rel_path};

/// Relative file paths made of short lowercase segments.
fn arb_rel_files() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(
        prop::collection::vec("[a-m]{1,3}", 1..4).prop_map(|parts| format!("{}.txt", parts.join("/"))),
        0..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_created_file_is_visited_once(files in arb_rel_files()) {
        let tmp = tempfile::tempdir().unwrap();
        let mut written = BTreeSet::new();
        for rel in &files {
            let path = tmp.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            // A path may collide with a directory created for another file.
            if fs::write(&path, "x").is_ok() {
                written.insert(rel.clone());
            }
        }

        let visited: Vec<String> = TreeWalker::new(tmp.path()).files().map(|e| e.rel_path).collect();
        let unique: BTreeSet<String> = visited.iter().cloned().collect();

        prop_assert_eq!(visited.len(), unique.len());
        prop_assert_eq!(unique, written);
    }

    #[test]
    fn files_under_excluded_names_are_never_visited(
        files in arb_rel_files(),
        idx in 0usize..4,
    ) {
        let excluded = ["node_modules", "target", ".git", "vendor"][idx];
        prop_assume!(ExclusionSet::default().is_excluded(excluded));
        let tmp = tempfile::tempdir().unwrap();
        for rel in &files {
            let path = tmp.path().join(excluded).join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            let _ = fs::write(&path, "x");
        }

        prop_assert_eq!(TreeWalker::new(tmp.path()).entries().count(), 0);
    }

    #[test]
    fn normalize_rel_path_removes_backslashes(path in "\\PC*") {
        let normalized = normalize_rel_path(&path);
        prop_assert!(!normalized.contains('\\'));
        prop_assert!(normalized.len() <= path.len());
    }
}
