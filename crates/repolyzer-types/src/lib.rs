//! # repolyzer-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the report data structures produced by the repolyzer
//! analyzers. It contains only data types, Serde definitions, and a few pure
//! helpers over those types.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the primary contract is the JSON document emitted
//! by `repolyzer --json`, not Rust struct literals. Use `Default` + field
//! mutation or `..Default::default()` when constructing reports by hand.
//!
//! ## What belongs here
//! * Pure data structs (reports, entries, checks)
//! * Serialization/Deserialization logic
//! * Size formatting
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Analyzer logic

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in [`StructureReport::largest_files`].
pub const LARGEST_FILES_LIMIT: usize = 5;

/// Maximum number of entries kept in [`GitReport::top_contributors`].
pub const TOP_CONTRIBUTORS_LIMIT: usize = 5;

/// Default cap for [`MarkerReport::items`].
pub const DEFAULT_MAX_MARKER_ITEMS: usize = 20;

// ---------
// Languages
// ---------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    pub files: usize,
    pub lines: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageReport {
    pub total_files: usize,
    pub total_lines: usize,
    /// Sorted by `lines`, descending.
    pub breakdown: Vec<LanguageEntry>,
}

impl LanguageReport {
    /// Build a report from unordered entries, sorting them and computing totals.
    ///
    /// Ties on line count are broken by name so output is deterministic.
    pub fn from_entries(mut breakdown: Vec<LanguageEntry>) -> Self {
        breakdown.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.name.cmp(&b.name)));
        let total_files = breakdown.iter().map(|e| e.files).sum();
        let total_lines = breakdown.iter().map(|e| e.lines).sum();
        Self {
            total_files,
            total_lines,
            breakdown,
        }
    }

    /// Share of all counted lines written in `entry`'s language, in percent.
    pub fn percent_of(&self, entry: &LanguageEntry) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        entry.lines as f64 / self.total_lines as f64 * 100.0
    }
}

// ---------
// Structure
// ---------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LargeFile {
    /// Root-relative path using `/` separators.
    pub path: String,
    pub size: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructureReport {
    pub total_files: usize,
    pub total_dirs: usize,
    pub total_size_bytes: u64,
    pub max_depth: usize,
    /// First directory reached at `max_depth`; empty when the root has no subdirectories.
    pub deepest_path: String,
    pub largest_files: Vec<LargeFile>,
}

impl StructureReport {
    pub fn size_human(&self) -> String {
        format_size(self.total_size_bytes)
    }
}

/// Format a byte count using binary units with one decimal place.
///
/// # Examples
///
/// ```
/// use repolyzer_types::format_size;
///
/// assert_eq!(format_size(500), "500.0 B");
/// assert_eq!(format_size(2048), "2.0 KB");
/// assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} TB")
}

// ---
// Git
// ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastCommit {
    pub message: String,
    /// Relative date as reported by git (`%ar`), e.g. "3 days ago".
    pub date: String,
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
    pub commits: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitReport {
    pub is_git_repo: bool,
    pub commits: usize,
    pub branches: usize,
    pub tags: usize,
    pub contributors: usize,
    pub current_branch: String,
    pub last_commit: Option<LastCommit>,
    pub first_commit_date: String,
    pub remote_url: String,
    pub uncommitted_changes: usize,
    pub top_contributors: Vec<Contributor>,
}

// ------------
// Dependencies
// ------------

/// Declared dependency counts for a single manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DependencyCounts {
    pub deps: usize,
    pub dev: usize,
}

impl DependencyCounts {
    pub fn new(deps: usize, dev: usize) -> Self {
        Self { deps, dev }
    }

    pub fn is_empty(&self) -> bool {
        self.deps == 0 && self.dev == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyFile {
    /// Manifest file name, e.g. `package.json`.
    pub name: String,
    /// Root-relative path of the manifest.
    pub path: String,
    pub count: usize,
    pub dev_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyReport {
    #[serde(rename = "total")]
    pub total_deps: usize,
    #[serde(rename = "dev")]
    pub total_dev_deps: usize,
    /// Manifest registry order, not sorted by count.
    pub files: Vec<DependencyFile>,
}

impl DependencyReport {
    pub fn push(&mut self, file: DependencyFile) {
        self.total_deps += file.count;
        self.total_dev_deps += file.dev_count;
        self.files.push(file);
    }
}

// ------
// Health
// ------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthCheck {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthReport {
    /// 0-100.
    pub score: u8,
    pub checks: Vec<HealthCheck>,
}

impl HealthReport {
    pub fn from_checks(checks: Vec<HealthCheck>) -> Self {
        let passed = checks.iter().filter(|c| c.passed).count();
        Self {
            score: health_score(passed, checks.len()),
            checks,
        }
    }

    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }
}

/// `round(100 * passed / total)`, or 0 for an empty checklist.
#[must_use]
pub fn health_score(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = passed.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

// -------
// Markers
// -------

/// Code markers in precedence order: when a line contains several, the
/// earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarkerKind {
    Todo,
    Fixme,
    Hack,
    Bug,
    Xxx,
    Optimize,
    Deprecated,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 7] = [
        MarkerKind::Todo,
        MarkerKind::Fixme,
        MarkerKind::Hack,
        MarkerKind::Bug,
        MarkerKind::Xxx,
        MarkerKind::Optimize,
        MarkerKind::Deprecated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Todo => "TODO",
            MarkerKind::Fixme => "FIXME",
            MarkerKind::Hack => "HACK",
            MarkerKind::Bug => "BUG",
            MarkerKind::Xxx => "XXX",
            MarkerKind::Optimize => "OPTIMIZE",
            MarkerKind::Deprecated => "DEPRECATED",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkerItem {
    pub marker: MarkerKind,
    /// Trimmed line text, at most 80 characters.
    pub text: String,
    /// Root-relative path using `/` separators.
    pub file: String,
    /// 1-based.
    pub line: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkerReport {
    pub total: usize,
    /// Every marker kind is present, including those never seen.
    pub counts: BTreeMap<MarkerKind, usize>,
    /// First matches in traversal order, capped by the scanner.
    pub items: Vec<MarkerItem>,
}

impl Default for MarkerReport {
    fn default() -> Self {
        Self {
            total: 0,
            counts: MarkerKind::ALL.iter().map(|kind| (*kind, 0)).collect(),
            items: Vec::new(),
        }
    }
}

impl MarkerReport {
    pub fn count(&self, kind: MarkerKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

// --------
// Analysis
// --------

/// The machine-readable document. Skipped analyzers are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoAnalysis {
    pub languages: LanguageReport,
    pub structure: StructureReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitReport>,
    pub dependencies: DependencyReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todos: Option<MarkerReport>,
}

/// One completed invocation: the analysis plus what the dashboard needs around it.
#[derive(Debug, Clone)]
pub struct Scan {
    /// Final component of the canonical root path.
    pub project: String,
    pub root: PathBuf,
    pub elapsed: Duration,
    pub analysis: RepoAnalysis,
}
