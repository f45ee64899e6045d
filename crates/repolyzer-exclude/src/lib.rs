//! Static directory-name exclusion policy.
//!
//! The policy applies to directory names only and is consulted before a
//! walker descends, so nothing inside an excluded directory is ever visited.

#![forbid(unsafe_code)]

/// Directory names that are never descended into.
///
/// Matching is exact and case-sensitive. Entries starting with `*` are the one
/// documented exception: `*.egg-info` matches any name ending in `.egg-info`.
pub const SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    "env",
    ".env",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "target",
    ".tox",
    "vendor",
    ".idea",
    ".vscode",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
    "coverage",
    ".coverage",
    "htmlcov",
    ".eggs",
    "*.egg-info",
    ".gradle",
    ".cargo",
    "bin",
    "obj",
];

/// A set of excluded directory names backed by a static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusionSet {
    names: &'static [&'static str],
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self { names: SKIP_DIRS }
    }
}

impl ExclusionSet {
    /// Build a set from a custom static table (mainly for tests and embedders).
    pub const fn from_static(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    /// Return `true` when a directory named `name` must not be descended into.
    ///
    /// # Examples
    ///
    /// ```
    /// use repolyzer_exclude::ExclusionSet;
    ///
    /// let set = ExclusionSet::default();
    /// assert!(set.is_excluded("node_modules"));
    /// assert!(set.is_excluded("mypkg.egg-info"));
    /// assert!(!set.is_excluded("src"));
    /// assert!(!set.is_excluded("Node_Modules"));
    /// ```
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.iter().any(|pattern| matches_name(pattern, name))
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }
}

fn matches_name(pattern: &str, name: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => name.len() > suffix.len() && name.ends_with(suffix),
        None => pattern == name,
    }
}
