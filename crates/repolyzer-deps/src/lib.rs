//! # repolyzer-deps
//!
//! **Tier 3 (Analyzers)**
//!
//! Counts declared dependencies in well-known manifest files found directly
//! in the repository root. Each manifest format has a small line- or
//! JSON-based parser; none of them resolve versions or follow includes.
//!
//! ## What belongs here
//! * The manifest registry and its parsers
//! * Dispatch over the registry for a root directory
//!
//! ## What does NOT belong here
//! * Recursive manifest discovery
//! * Dependency resolution or lockfile reading

#![forbid(unsafe_code)]

mod parsers;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use repolyzer_types::{DependencyCounts, DependencyFile, DependencyReport};
use tracing::debug;

pub use parsers::*;

/// Parses manifest text into `(deps, dev)` counts.
pub type ManifestParser = fn(&str) -> Result<DependencyCounts>;

/// Manifests checked in the root directory, in report order.
pub const MANIFESTS: &[(&str, ManifestParser)] = &[
    ("package.json", parse_package_json),
    ("requirements.txt", parse_requirements_txt),
    ("Pipfile", parse_pipfile),
    ("pyproject.toml", parse_pyproject_toml),
    ("Cargo.toml", parse_cargo_toml),
    ("go.mod", parse_go_mod),
    ("Gemfile", parse_gemfile),
    ("composer.json", parse_composer_json),
    ("pom.xml", parse_pom_xml),
    ("build.gradle", parse_gradle),
    ("pubspec.yaml", parse_pubspec),
    ("mix.exs", parse_mix),
];

/// Look up the parser registered for a manifest file name.
#[must_use]
pub fn parser_for(name: &str) -> Option<ManifestParser> {
    MANIFESTS
        .iter()
        .find(|(manifest, _)| *manifest == name)
        .map(|(_, parser)| *parser)
}

/// Count dependencies declared by manifests in `root` (not recursive).
///
/// Unreadable or malformed manifests count as zero, and manifests with no
/// dependencies at all are left out of the report.
pub fn analyze_dependencies(root: &Path) -> DependencyReport {
    let mut report = DependencyReport::default();

    for (name, parser) in MANIFESTS {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        let counts = match read_manifest(&path, *parser) {
            Ok(counts) => counts,
            Err(err) => {
                debug!(manifest = name, error = %format!("{err:#}"), "manifest counted as empty");
                DependencyCounts::default()
            }
        };
        if counts.is_empty() {
            continue;
        }
        report.push(DependencyFile {
            name: (*name).to_string(),
            path: (*name).to_string(),
            count: counts.deps,
            dev_count: counts.dev,
        });
    }

    report
}

fn read_manifest(path: &Path, parser: ManifestParser) -> Result<DependencyCounts> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    parser(&text).with_context(|| format!("Failed to parse manifest {}", path.display()))
}
