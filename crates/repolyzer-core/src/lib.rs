//! # repolyzer-core
//!
//! **Tier 4 (Orchestration)**
//!
//! The primary library interface for `repolyzer`. It validates the target
//! directory and runs every enabled analyzer once, in a fixed order, to
//! produce a [`Scan`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use repolyzer_core::analyze;
//! use repolyzer_settings::AnalyzeSettings;
//!
//! let scan = analyze(&AnalyzeSettings::for_path(".")).expect("analysis failed");
//! println!("{}: {} files", scan.project, scan.analysis.structure.total_files);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

pub use repolyzer_settings as settings;
pub use repolyzer_types as types;

use repolyzer_settings::AnalyzeSettings;
use repolyzer_types::{RepoAnalysis, Scan};

/// One analyzer step, reported to the progress callback before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Languages,
    Structure,
    Git,
    Dependencies,
    Health,
    Markers,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Languages => "languages",
            Stage::Structure => "structure",
            Stage::Git => "git",
            Stage::Dependencies => "dependencies",
            Stage::Health => "health",
            Stage::Markers => "markers",
        }
    }

    /// Progress text shown while this stage runs.
    pub fn message(&self) -> &'static str {
        match self {
            Stage::Languages => "Analyzing languages...",
            Stage::Structure => "Analyzing structure...",
            Stage::Git => "Reading git history...",
            Stage::Dependencies => "Counting dependencies...",
            Stage::Health => "Checking repository health...",
            Stage::Markers => "Scanning code markers...",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the full analysis without progress reporting.
pub fn analyze(settings: &AnalyzeSettings) -> Result<Scan> {
    analyze_with_progress(settings, |_| {})
}

/// Runs the full analysis, calling `on_stage` before each analyzer.
///
/// The only error is an invalid target path; every analyzer degrades to
/// empty results instead of failing.
pub fn analyze_with_progress(
    settings: &AnalyzeSettings,
    mut on_stage: impl FnMut(Stage),
) -> Result<Scan> {
    let started = Instant::now();
    let root = resolve_root(&settings.path)?;
    let project = project_name(&root);
    debug!(root = %root.display(), "analyzing");

    let mut run = |stage: Stage| {
        on_stage(stage);
        info_span!("analyzer", stage = stage.as_str()).entered()
    };

    let languages = {
        let _span = run(Stage::Languages);
        repolyzer_scan::analyze_languages(&root)
    };
    let structure = {
        let _span = run(Stage::Structure);
        repolyzer_scan::analyze_structure(&root)
    };
    let git = settings.git.then(|| {
        let _span = run(Stage::Git);
        repolyzer_git::analyze_git(&root, settings.git_timeout())
    });
    let dependencies = {
        let _span = run(Stage::Dependencies);
        repolyzer_deps::analyze_dependencies(&root)
    };
    let health = settings.health.then(|| {
        let _span = run(Stage::Health);
        repolyzer_health::analyze_health(&root)
    });
    let todos = settings.todos.then(|| {
        let _span = run(Stage::Markers);
        repolyzer_content::scan_markers(&root, settings.max_todo_items)
    });

    Ok(Scan {
        project,
        root,
        elapsed: started.elapsed(),
        analysis: RepoAnalysis {
            languages,
            structure,
            git,
            dependencies,
            health,
            todos,
        },
    })
}

/// Check that `path` is an existing directory and canonicalize it.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        bail!("Path not found: {}", path.display());
    }
    if !path.is_dir() {
        bail!("Not a directory: {}", path.display());
    }
    path.canonicalize()
        .with_context(|| format!("Failed to resolve {}", path.display()))
}

fn project_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
