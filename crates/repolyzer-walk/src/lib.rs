//! # repolyzer-walk
//!
//! **Tier 2 (Utilities)**
//!
//! Exclusion-aware directory traversal shared by the language, structure and
//! marker analyzers. Each analyzer performs its own walk; there is no shared
//! traversal cache.
//!
//! ## What belongs here
//! * Recursive traversal with directory pruning
//! * Root-relative path normalization
//!
//! ## What does NOT belong here
//! * Content scanning (use repolyzer-content)
//! * Extension classification (use repolyzer-lang)
//! * Aggregation (use repolyzer-scan)

use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};
use repolyzer_exclude::ExclusionSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    /// A symlink that resolves to a directory. Listed, never descended into.
    SymlinkDir,
    File,
}

/// One visited filesystem entry below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    /// Root-relative path with `/` separators.
    pub rel_path: String,
    /// Path components below the root; direct children of the root are at depth 1.
    pub depth: usize,
    pub kind: EntryKind,
}

impl WalkEntry {
    /// Real directories and symlinks to directories.
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Dir | EntryKind::SymlinkDir)
    }

    pub fn is_symlink_dir(&self) -> bool {
        self.kind == EntryKind::SymlinkDir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// A depth-first, name-sorted walk that never descends into excluded directories.
///
/// Symlinks are not followed. Symlinks that resolve to directories are reported
/// as [`EntryKind::SymlinkDir`] and subject to the exclusion set like any other
/// directory; symlinks to files (including dangling ones) are reported as files.
#[derive(Debug, Clone)]
pub struct TreeWalker {
    root: PathBuf,
    exclusions: ExclusionSet,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclusions: ExclusionSet::default(),
        }
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily iterate every non-excluded directory and file below the root.
    pub fn entries(&self) -> WalkEntries {
        let exclusions = self.exclusions;
        let mut builder = WalkBuilder::new(&self.root);
        builder.standard_filters(false);
        builder.follow_links(false);
        builder.sort_by_file_name(|a, b| a.cmp(b));
        builder.filter_entry(move |entry| {
            // The root is never pruned, whatever its name.
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|t| {
                t.is_dir() || (t.is_symlink() && entry.path().is_dir())
            });
            !(is_dir && exclusions.is_excluded(&entry.file_name().to_string_lossy()))
        });

        WalkEntries {
            inner: builder.build(),
            root: self.root.clone(),
        }
    }

    /// Lazily iterate files only.
    pub fn files(&self) -> impl Iterator<Item = WalkEntry> {
        self.entries().filter(WalkEntry::is_file)
    }
}

/// Iterator returned by [`TreeWalker::entries`].
pub struct WalkEntries {
    inner: Walk,
    root: PathBuf,
}

impl Iterator for WalkEntries {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }
            let Some(file_type) = entry.file_type() else {
                continue;
            };

            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_symlink() && entry.path().is_dir() {
                EntryKind::SymlinkDir
            } else {
                EntryKind::File
            };

            let path = entry.path().to_path_buf();
            return Some(WalkEntry {
                rel_path: relative_path(&self.root, &path),
                depth: entry.depth(),
                kind,
                path,
            });
        }
    }
}

/// Root-relative display path with `/` separators.
///
/// Paths outside the root are returned whole (normalized).
#[must_use]
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    normalize_rel_path(&rel.to_string_lossy())
}

/// Normalize a relative path for display:
/// - converts `\` to `/`
/// - strips one leading `./`
///
/// # Examples
///
/// ```
/// use repolyzer_walk::normalize_rel_path;
///
/// assert_eq!(normalize_rel_path("./src/main.rs"), "src/main.rs");
/// assert_eq!(normalize_rel_path(r"src\lib.rs"), "src/lib.rs");
/// ```
#[must_use]
pub fn normalize_rel_path(path: &str) -> String {
    let normalized = if path.contains('\\') {
        path.replace('\\', "/")
    } else {
        path.to_string()
    };
    match normalized.strip_prefix("./") {
        Some(stripped) => stripped.to_string(),
        None => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn rel_paths(walker: &TreeWalker) -> Vec<String> {
        walker.entries().map(|e| e.rel_path).collect()
    }

    #[test]
    fn root_itself_is_not_yielded() {
        let dir = tempfile::tempdir().unwrap();
        assert!(rel_paths(&TreeWalker::new(dir.path())).is_empty());
    }

    #[test]
    fn entries_are_name_sorted_depth_first() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/inner")).unwrap();
        fs::write(dir.path().join("a.rs"), "").unwrap();
        fs::write(dir.path().join("b/inner/c.rs"), "").unwrap();
        fs::write(dir.path().join("z.rs"), "").unwrap();

        let paths = rel_paths(&TreeWalker::new(dir.path()));
        assert_eq!(paths, vec!["a.rs", "b", "b/inner", "b/inner/c.rs", "z.rs"]);
    }

    #[test]
    fn depth_counts_components_below_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/f.txt"), "x").unwrap();

        let depths: Vec<(String, usize)> = TreeWalker::new(dir.path())
            .entries()
            .map(|e| (e.rel_path, e.depth))
            .collect();
        assert_eq!(
            depths,
            vec![
                ("a".to_string(), 1),
                ("a/b".to_string(), 2),
                ("a/b/f.txt".to_string(), 3)
            ]
        );
    }

    #[test]
    fn excluded_directories_are_pruned() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::write(dir.path().join("node_modules/pkg/index.js"), "x").unwrap();
        fs::write(dir.path().join("app.js"), "x").unwrap();

        assert_eq!(rel_paths(&TreeWalker::new(dir.path())), vec!["app.js"]);
    }

    #[test]
    fn excluded_names_do_not_apply_to_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("build"), "not a directory").unwrap();
        assert_eq!(rel_paths(&TreeWalker::new(dir.path())), vec!["build"]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let walker = TreeWalker::new(dir.path().join("does-not-exist"));
        assert_eq!(walker.entries().count(), 0);
    }

    #[test]
    fn normalize_rel_path_keeps_parent_prefix() {
        assert_eq!(normalize_rel_path("../src/main.rs"), "../src/main.rs");
        assert_eq!(normalize_rel_path(r".\src\main.rs"), "src/main.rs");
    }

    #[test]
    fn relative_path_strips_root() {
        let root = Path::new("/repo");
        assert_eq!(relative_path(root, Path::new("/repo/src/lib.rs")), "src/lib.rs");
        assert_eq!(relative_path(root, Path::new("/other/x.rs")), "/other/x.rs");
    }
}
