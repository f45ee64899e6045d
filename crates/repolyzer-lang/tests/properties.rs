use std::path::PathBuf;

use proptest::prelude::*;
use repolyzer_lang::{EXTENSIONS, classify_path, is_code_file, language_for_extension};

proptest! {
    #[test]
    fn table_keys_classify_under_any_stem(
        idx in 0usize..EXTENSIONS.len(),
        stem in "[a-z][a-z0-9_]{0,10}",
        dir in "[a-z]{1,6}",
    ) {
        let (ext, lang) = EXTENSIONS[idx];
        let path = PathBuf::from(dir).join(format!("{stem}{ext}"));
        prop_assert_eq!(classify_path(&path), Some(lang));
        prop_assert!(is_code_file(&path));
    }

    #[test]
    fn marker_filter_agrees_with_classifier(name in "[a-zA-Z0-9_]{1,8}(\\.[a-zA-Z]{1,6})?") {
        let path = PathBuf::from(&name);
        prop_assert_eq!(is_code_file(&path), classify_path(&path).is_some());
    }

    #[test]
    fn lookup_without_dot_never_matches(ext in "[a-z]{1,6}") {
        prop_assert_eq!(language_for_extension(&ext), None);
    }
}
