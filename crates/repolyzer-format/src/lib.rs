//! # repolyzer-format
//!
//! **Tier 4 (Formatting)**
//!
//! Renders a [`Scan`] as a colored terminal dashboard or a JSON document.
//! Rendering is pure: functions return strings and the caller decides where
//! they go. Colors come from `console`, which turns them off when stdout is
//! not a terminal or `NO_COLOR` is set.
//!
//! ## What belongs here
//! * Dashboard layout and styling
//! * JSON serialization of [`RepoAnalysis`]
//!
//! ## What does NOT belong here
//! * Running analyzers (use repolyzer-core)
//! * Progress display (the binary owns it)

mod dashboard;

use anyhow::Result;
use repolyzer_settings::{DashboardOptions, OutputFormat};
use repolyzer_types::{RepoAnalysis, Scan};

pub use dashboard::{bar, group_digits, render_dashboard};

/// Pretty-printed JSON document for `analysis`.
pub fn render_json(analysis: &RepoAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

/// Render `scan` in the requested format.
pub fn render(scan: &Scan, format: OutputFormat, options: &DashboardOptions) -> Result<String> {
    match format {
        OutputFormat::Dashboard => Ok(render_dashboard(scan, options)),
        OutputFormat::Json => render_json(&scan.analysis),
    }
}

/// Render `scan` and write it to stdout.
pub fn print_scan(scan: &Scan, format: OutputFormat, options: &DashboardOptions) -> Result<()> {
    let out = render(scan, format, options)?;
    match format {
        OutputFormat::Dashboard => print!("{out}"),
        OutputFormat::Json => println!("{out}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use repolyzer_types::{GitReport, HealthReport, MarkerReport};

    #[test]
    fn json_contains_always_present_sections() {
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&RepoAnalysis::default()).unwrap()).unwrap();
        assert!(value.get("languages").is_some());
        assert!(value.get("structure").is_some());
        assert!(value.get("dependencies").is_some());
        assert!(value.get("git").is_none());
        assert!(value.get("health").is_none());
        assert!(value.get("todos").is_none());
    }

    #[test]
    fn json_uses_documented_field_names() {
        let analysis = RepoAnalysis {
            git: Some(GitReport::default()),
            health: Some(HealthReport::default()),
            todos: Some(MarkerReport::default()),
            ..RepoAnalysis::default()
        };
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&analysis).unwrap()).unwrap();

        assert_eq!(value["dependencies"]["total"], 0);
        assert_eq!(value["dependencies"]["dev"], 0);
        assert_eq!(value["git"]["is_git_repo"], false);
        assert!(value["git"]["last_commit"].is_null());
        assert_eq!(value["todos"]["counts"]["TODO"], 0);
        assert_eq!(value["todos"]["counts"]["DEPRECATED"], 0);
        assert_eq!(value["structure"]["largest_files"], serde_json::json!([]));
    }

    #[test]
    fn json_is_pretty_printed() {
        let out = render_json(&RepoAnalysis::default()).unwrap();
        assert!(out.starts_with("{\n  \"languages\""));
    }
}
