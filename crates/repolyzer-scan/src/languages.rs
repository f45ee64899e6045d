use std::collections::BTreeMap;
use std::path::Path;

use repolyzer_content::count_file_lines;
use repolyzer_lang::classify_path;
use repolyzer_types::{LanguageEntry, LanguageReport};
use repolyzer_walk::TreeWalker;

/// Count files and lines per language below `root`.
///
/// A classified file that cannot be read still counts as a file, with 0 lines.
pub fn analyze_languages(root: &Path) -> LanguageReport {
    let mut by_lang: BTreeMap<&'static str, (usize, usize)> = BTreeMap::new();

    for entry in TreeWalker::new(root).files() {
        let Some(lang) = classify_path(&entry.path) else {
            continue;
        };
        let lines = count_file_lines(&entry.path);
        let slot = by_lang.entry(lang).or_default();
        slot.0 += 1;
        slot.1 += lines;
    }

    LanguageReport::from_entries(
        by_lang
            .into_iter()
            .map(|(name, (files, lines))| LanguageEntry {
                name: name.to_string(),
                files,
                lines,
            })
            .collect(),
    )
}
