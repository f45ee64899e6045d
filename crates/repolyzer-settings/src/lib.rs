//! # repolyzer-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings types for the analysis and rendering layers, plus the
//! schema of the optional user configuration file. These types mirror the CLI
//! arguments without Clap dependencies so library consumers can drive an
//! analysis directly.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values and the CLI > config > default resolution
//!
//! ## What does NOT belong here
//! * Clap parsing (use repolyzer-config)
//! * Locating the config file on disk (done by the binary)
//! * Business logic

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default number of marker lines kept as samples.
pub const DEFAULT_MAX_TODO_ITEMS: usize = 20;
/// Default per-command timeout for git queries.
pub const DEFAULT_GIT_TIMEOUT_SECS: u64 = 10;
/// Shortest accepted git timeout; smaller values are raised to it.
pub const MIN_GIT_TIMEOUT_SECS: u64 = 1;
/// Default number of languages shown on the dashboard.
pub const DEFAULT_TOP_LANGUAGES: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable text dashboard.
    #[default]
    Dashboard,
    /// Single JSON document on stdout.
    Json,
}

/// Everything a single analysis run needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeSettings {
    /// Directory to analyze (defaults to `.`).
    pub path: PathBuf,

    /// Run the git history reader.
    #[serde(default = "default_true")]
    pub git: bool,

    /// Run the health checklist.
    #[serde(default = "default_true")]
    pub health: bool,

    /// Run the code-marker scanner.
    #[serde(default = "default_true")]
    pub todos: bool,

    /// Cap on sampled marker lines.
    #[serde(default = "default_max_todo_items")]
    pub max_todo_items: usize,

    /// Per-command timeout for git queries, in seconds.
    #[serde(default = "default_git_timeout_secs")]
    pub git_timeout_secs: u64,
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            git: true,
            health: true,
            todos: true,
            max_todo_items: DEFAULT_MAX_TODO_ITEMS,
            git_timeout_secs: DEFAULT_GIT_TIMEOUT_SECS,
        }
    }
}

impl AnalyzeSettings {
    /// Settings for analyzing `path` with every analyzer enabled.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Per-command git timeout, never shorter than [`MIN_GIT_TIMEOUT_SECS`].
    pub fn git_timeout(&self) -> Duration {
        Duration::from_secs(self.git_timeout_secs.max(MIN_GIT_TIMEOUT_SECS))
    }
}

/// Presentation options for the text dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOptions {
    /// Show only the top N languages (0 = all).
    #[serde(default = "default_top_languages")]
    pub top_languages: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            top_languages: DEFAULT_TOP_LANGUAGES,
        }
    }
}

/// Contents of `<config dir>/repolyzer/config.toml`. Every key is optional.
///
/// ```toml
/// max_todo_items = 50
/// git_timeout_secs = 5
/// top_languages = 15
/// progress = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    pub max_todo_items: Option<usize>,
    pub git_timeout_secs: Option<u64>,
    pub top_languages: Option<usize>,
    pub progress: Option<bool>,
}

impl UserConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse repolyzer config TOML")
    }
}

/// Command-line overrides; `None` means "not given on the command line".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_todo_items: Option<usize>,
    pub git_timeout_secs: Option<u64>,
    pub top_languages: Option<usize>,
}

/// Resolve analysis settings: CLI overrides, then config, then defaults.
pub fn resolve_analyze(
    mut base: AnalyzeSettings,
    overrides: &Overrides,
    config: Option<&UserConfig>,
) -> AnalyzeSettings {
    base.max_todo_items = overrides
        .max_todo_items
        .or_else(|| config.and_then(|c| c.max_todo_items))
        .unwrap_or(DEFAULT_MAX_TODO_ITEMS);
    base.git_timeout_secs = overrides
        .git_timeout_secs
        .or_else(|| config.and_then(|c| c.git_timeout_secs))
        .unwrap_or(DEFAULT_GIT_TIMEOUT_SECS)
        .max(MIN_GIT_TIMEOUT_SECS);
    base
}

/// Resolve dashboard options: CLI overrides, then config, then defaults.
pub fn resolve_dashboard(overrides: &Overrides, config: Option<&UserConfig>) -> DashboardOptions {
    DashboardOptions {
        top_languages: overrides
            .top_languages
            .or_else(|| config.and_then(|c| c.top_languages))
            .unwrap_or(DEFAULT_TOP_LANGUAGES),
    }
}

fn default_true() -> bool {
    true
}

fn default_max_todo_items() -> usize {
    DEFAULT_MAX_TODO_ITEMS
}

fn default_git_timeout_secs() -> u64 {
    DEFAULT_GIT_TIMEOUT_SECS
}

fn default_top_languages() -> usize {
    DEFAULT_TOP_LANGUAGES
}
