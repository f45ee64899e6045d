//! Property-based tests for repolyzer-scan.

use std::fs;

use proptest::prelude::*;
use repolyzer_scan::{analyze_languages, analyze_structure};

fn arb_files() -> impl Strategy<Value = Vec<(String, usize)>> {
    prop::collection::btree_map(
        "[a-f]{1,4}\\.(rs|py|go|txt|bin)",
        0usize..6,
        0..10,
    )
    .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn language_totals_equal_sums(files in arb_files()) {
        let tmp = tempfile::tempdir().unwrap();
        for (name, lines) in &files {
            fs::write(tmp.path().join(name), "x\n".repeat(*lines)).unwrap();
        }

        let report = analyze_languages(tmp.path());
        prop_assert_eq!(report.total_files, report.breakdown.iter().map(|e| e.files).sum::<usize>());
        prop_assert_eq!(report.total_lines, report.breakdown.iter().map(|e| e.lines).sum::<usize>());
        prop_assert!(report.breakdown.windows(2).all(|w| w[0].lines >= w[1].lines));
    }

    #[test]
    fn largest_files_sorted_and_capped(files in arb_files()) {
        let tmp = tempfile::tempdir().unwrap();
        for (name, lines) in &files {
            fs::write(tmp.path().join(name), "x\n".repeat(*lines)).unwrap();
        }

        let report = analyze_structure(tmp.path());
        prop_assert_eq!(report.total_files, files.len());
        prop_assert_eq!(report.largest_files.len(), files.len().min(5));
        prop_assert!(report.largest_files.windows(2).all(|w| w[0].size >= w[1].size));
        prop_assert_eq!(
            report.total_size_bytes,
            files.iter().map(|(_, l)| (*l * 2) as u64).sum::<u64>()
        );
    }
}
