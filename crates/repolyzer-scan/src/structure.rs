use std::fs;
use std::path::Path;

use repolyzer_types::{LARGEST_FILES_LIMIT, LargeFile, StructureReport};
use repolyzer_walk::TreeWalker;
use tracing::debug;

/// Count directories, files and bytes below `root`, tracking the deepest
/// directory and the largest files.
pub fn analyze_structure(root: &Path) -> StructureReport {
    let mut report = StructureReport::default();
    let mut sizes: Vec<LargeFile> = Vec::new();

    for entry in TreeWalker::new(root).entries() {
        if entry.is_dir() {
            report.total_dirs += 1;
            // Symlinked directories are counted but never entered.
            if !entry.is_symlink_dir() && entry.depth > report.max_depth {
                report.max_depth = entry.depth;
                report.deepest_path = entry.rel_path;
            }
            continue;
        }

        let size = match fs::metadata(&entry.path) {
            Ok(meta) => meta.len(),
            Err(err) => {
                debug!(path = %entry.path.display(), error = %err, "skipping file without metadata");
                continue;
            }
        };
        report.total_files += 1;
        report.total_size_bytes += size;
        sizes.push(LargeFile {
            path: entry.rel_path,
            size,
        });
    }

    // Stable: equal sizes keep traversal order.
    sizes.sort_by(|a, b| b.size.cmp(&a.size));
    sizes.truncate(LARGEST_FILES_LIMIT);
    report.largest_files = sizes;
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_root_has_no_depth() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "abc").unwrap();

        let report = analyze_structure(dir.path());
        assert_eq!(report.total_files, 1);
        assert_eq!(report.total_dirs, 0);
        assert_eq!(report.max_depth, 0);
        assert_eq!(report.deepest_path, "");
        assert_eq!(report.total_size_bytes, 3);
    }

    #[test]
    fn deepest_path_is_first_directory_at_max_depth() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/x")).unwrap();
        fs::create_dir_all(dir.path().join("b/y")).unwrap();
        fs::create_dir_all(dir.path().join("c")).unwrap();

        let report = analyze_structure(dir.path());
        assert_eq!(report.total_dirs, 5);
        assert_eq!(report.max_depth, 2);
        assert_eq!(report.deepest_path, "a/x");
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_count_without_adding_depth() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("real/back")).unwrap();

        let report = analyze_structure(dir.path());
        assert_eq!(report.total_dirs, 3);
        assert_eq!(report.max_depth, 1);
        assert_eq!(report.deepest_path, "real");
        assert_eq!(report.total_files, 0);
    }

    #[test]
    fn largest_files_are_capped_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for (i, len) in [10usize, 700, 30, 500, 90, 1, 300].iter().enumerate() {
            fs::write(dir.path().join(format!("f{i}.bin")), vec![0u8; *len]).unwrap();
        }

        let report = analyze_structure(dir.path());
        let sizes: Vec<u64> = report.largest_files.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![700, 500, 300, 90, 30]);
        assert_eq!(report.largest_files[0].path, "f1.bin");
        assert_eq!(report.total_files, 7);
    }

    #[test]
    fn equal_sizes_keep_traversal_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(dir.path().join(name), "same").unwrap();
        }

        let report = analyze_structure(dir.path());
        let paths: Vec<_> = report.largest_files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.txt", "b.txt", "c.txt"]);
    }
}
