//! Code-marker scanning.
//!
//! Every line of every classified source file is tested against the marker
//! patterns in [`MarkerKind`] order. Matching is whole-word and
//! case-insensitive, except `XXX`, which must be upper case. A line counts at
//! most once, for the first marker that matches.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use repolyzer_lang::is_code_file;
use repolyzer_types::{MarkerItem, MarkerKind, MarkerReport};
use repolyzer_walk::TreeWalker;
use tracing::debug;

use crate::{read_text_lossy, split_lines};

/// Longest item text kept as-is; longer lines are cut and suffixed with `...`.
const MAX_TEXT_CHARS: usize = 80;
const ELLIPSIS: &str = "...";

static PATTERNS: LazyLock<Vec<(MarkerKind, Regex)>> = LazyLock::new(|| {
    MarkerKind::ALL
        .iter()
        .map(|kind| {
            let pattern = match kind {
                MarkerKind::Xxx => format!(r"\b{}\b", kind.as_str()),
                _ => format!(r"(?i)\b{}\b", kind.as_str()),
            };
            (*kind, Regex::new(&pattern).expect("valid regex literal"))
        })
        .collect()
});

/// The marker a line is counted under, if any.
///
/// # Examples
///
/// ```
/// use repolyzer_content::first_marker;
/// use repolyzer_types::MarkerKind;
///
/// assert_eq!(first_marker("// FIXME and TODO"), Some(MarkerKind::Todo));
/// assert_eq!(first_marker("let xxx = 1;"), None);
/// assert_eq!(first_marker("// todos: none"), None);
/// ```
#[must_use]
pub fn first_marker(line: &str) -> Option<MarkerKind> {
    PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(line))
        .map(|(kind, _)| *kind)
}

/// Trim `line`; keep at most 80 characters, cutting to 77 plus `...`.
#[must_use]
pub fn truncate_text(line: &str) -> String {
    let text = line.trim();
    if text.chars().count() <= MAX_TEXT_CHARS {
        return text.to_string();
    }
    let keep = MAX_TEXT_CHARS - ELLIPSIS.len();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Scan every classified file under `root`, keeping the first `max_items`
/// matches as items. Counts and the total always cover every match.
pub fn scan_markers(root: &Path, max_items: usize) -> MarkerReport {
    let mut report = MarkerReport::default();

    for entry in TreeWalker::new(root).files() {
        if !is_code_file(&entry.path) {
            continue;
        }
        let text = match read_text_lossy(&entry.path) {
            Ok(text) => text,
            Err(err) => {
                debug!(error = %err, "skipping unreadable file");
                continue;
            }
        };
        scan_text(&text, &entry.rel_path, max_items, &mut report);
    }

    report
}

fn scan_text(text: &str, file: &str, max_items: usize, report: &mut MarkerReport) {
    for (idx, line) in split_lines(text).enumerate() {
        let Some(kind) = first_marker(line) else {
            continue;
        };
        *report.counts.entry(kind).or_insert(0) += 1;
        report.total += 1;
        if report.items.len() < max_items {
            report.items.push(MarkerItem {
                marker: kind,
                text: truncate_text(line),
                file: file.to_string(),
                line: idx + 1,
            });
        }
    }
}
