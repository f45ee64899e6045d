//! Property-based tests for repolyzer-content.

use proptest::prelude::*;
use repolyzer_content::{count_lines, first_marker, truncate_text};
use repolyzer_types::MarkerKind;

proptest! {
    #[test]
    fn trailing_newline_never_changes_line_count(lines in prop::collection::vec("[^\r\n]{1,12}", 1..20)) {
        let joined = lines.join("\n");
        prop_assert_eq!(count_lines(&joined), count_lines(&format!("{joined}\n")));
        prop_assert_eq!(count_lines(&joined), lines.len());
    }

    #[test]
    fn truncated_text_never_exceeds_eighty_chars(line in "\\PC{0,200}") {
        let text = truncate_text(&line);
        prop_assert!(text.chars().count() <= 80);
        if line.trim().chars().count() <= 80 {
            prop_assert_eq!(text, line.trim());
        }
    }

    #[test]
    fn todo_always_wins_when_present(
        prefix in "[a-z ]{0,8}",
        idx in 0usize..MarkerKind::ALL.len(),
    ) {
        let other = MarkerKind::ALL[idx];
        let line = format!("{prefix} {other} and TODO");
        prop_assert_eq!(first_marker(&line), Some(MarkerKind::Todo));
    }

    #[test]
    fn lowercase_words_without_markers_never_match(word in "[a-w]{1,12}") {
        prop_assume!(!["todo", "fixme", "hack", "bug", "optimize", "deprecated"].contains(&word.as_str()));
        prop_assert_eq!(first_marker(&word), None);
    }
}
