//! # repolyzer-health
//!
//! **Tier 3 (Analyzers)**
//!
//! A fixed checklist of repository hygiene indicators, each satisfied by the
//! presence of any one of its candidate paths under the root.
//!
//! ## What belongs here
//! * The checklist table
//! * Evaluating it against a root directory
//!
//! ## What does NOT belong here
//! * Inspecting file contents
//! * Configurable or user-defined checks

#![forbid(unsafe_code)]

use std::path::Path;

use repolyzer_types::{HealthCheck, HealthReport};
use tracing::trace;

/// How a check describes itself in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail {
    /// Always this text, pass or fail.
    Fixed(&'static str),
    /// The matched candidate path on pass, this text on failure.
    MatchedOr(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct CheckRule {
    pub name: &'static str,
    /// Root-relative paths, tried in order.
    pub candidates: &'static [&'static str],
    pub detail: Detail,
}

/// The checklist, in report order.
pub const CHECKS: &[CheckRule] = &[
    CheckRule {
        name: "README",
        candidates: &["README.md", "README.rst", "README.txt", "README"],
        detail: Detail::Fixed("Documentation for your project"),
    },
    CheckRule {
        name: "License",
        candidates: &["LICENSE", "LICENSE.md", "LICENSE.txt", "LICENCE", "COPYING"],
        detail: Detail::Fixed("Open source license"),
    },
    CheckRule {
        name: ".gitignore",
        candidates: &[".gitignore"],
        detail: Detail::Fixed("Git ignore rules"),
    },
    CheckRule {
        name: "CI/CD",
        candidates: &[
            ".github/workflows",
            ".gitlab-ci.yml",
            ".circleci/config.yml",
            "Jenkinsfile",
            ".travis.yml",
            "azure-pipelines.yml",
            "bitbucket-pipelines.yml",
        ],
        detail: Detail::MatchedOr("No CI/CD configuration found"),
    },
    CheckRule {
        name: "Tests",
        candidates: &["tests", "test", "spec", "__tests__"],
        detail: Detail::MatchedOr("No test directory found"),
    },
    CheckRule {
        name: "Docker",
        candidates: &[
            "Dockerfile",
            "docker-compose.yml",
            "docker-compose.yaml",
            "compose.yml",
            "compose.yaml",
        ],
        detail: Detail::MatchedOr("No Docker configuration"),
    },
    CheckRule {
        name: "Contributing guide",
        candidates: &["CONTRIBUTING.md", "CONTRIBUTING.rst", "CONTRIBUTING"],
        detail: Detail::Fixed("Guide for contributors"),
    },
    CheckRule {
        name: "Changelog",
        candidates: &["CHANGELOG.md", "CHANGELOG", "CHANGES.md", "HISTORY.md"],
        detail: Detail::Fixed("Project changelog"),
    },
    CheckRule {
        name: "Security policy",
        candidates: &["SECURITY.md", ".github/SECURITY.md"],
        detail: Detail::Fixed("Security reporting guidelines"),
    },
    CheckRule {
        name: "Linter/Formatter",
        candidates: &[
            ".editorconfig",
            ".prettierrc",
            ".prettierrc.json",
            ".eslintrc.json",
            "ruff.toml",
            ".flake8",
            "setup.cfg",
        ],
        detail: Detail::Fixed("Code style configuration"),
    },
];

impl CheckRule {
    /// First candidate that exists under `root`, as a file or directory.
    pub fn find(&self, root: &Path) -> Option<&'static str> {
        self.candidates
            .iter()
            .copied()
            .find(|candidate| root.join(candidate).exists())
    }

    pub fn evaluate(&self, root: &Path) -> HealthCheck {
        let matched = self.find(root);
        trace!(check = self.name, matched = ?matched, "health check");
        let detail = match (self.detail, matched) {
            (Detail::Fixed(text), _) => text,
            (Detail::MatchedOr(_), Some(path)) => path,
            (Detail::MatchedOr(missing), None) => missing,
        };
        HealthCheck {
            name: self.name.to_string(),
            passed: matched.is_some(),
            detail: detail.to_string(),
        }
    }
}

/// Evaluate every check in [`CHECKS`] against `root`.
pub fn analyze_health(root: &Path) -> HealthReport {
    HealthReport::from_checks(CHECKS.iter().map(|rule| rule.evaluate(root)).collect())
}
