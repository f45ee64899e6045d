//! # repolyzer-config
//!
//! **Tier 5 (Configuration)**
//!
//! This crate defines the command-line arguments and their conversion into
//! the clap-free settings types of `repolyzer-settings`.
//!
//! ## What belongs here
//! * The Clap `Parser` struct
//! * Mapping parsed flags to settings and overrides
//!
//! ## What does NOT belong here
//! * Business logic
//! * Reading the user config file (done by the binary)

use std::path::PathBuf;

use clap::Parser;
use repolyzer_settings::{AnalyzeSettings, OutputFormat, Overrides};

/// Instant insights about any codebase.
///
/// Analyzes the repository at PATH (defaults to the current directory) and
/// reports languages, structure, git history, dependencies, health, and code
/// markers.
#[derive(Parser, Debug, Clone)]
#[command(name = "repolyzer", version, about, long_about = None)]
pub struct Cli {
    /// Directory to analyze.
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Skip git analysis.
    #[arg(long)]
    pub no_git: bool,

    /// Skip health checks.
    #[arg(long)]
    pub no_health: bool,

    /// Skip TODO/FIXME scanning.
    #[arg(long)]
    pub no_todos: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,

    /// Maximum number of marker lines listed (counts are never capped).
    #[arg(long, value_name = "N")]
    pub max_todos: Option<usize>,

    /// Timeout for each git command, in seconds.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub git_timeout: Option<u64>,

    /// Number of languages shown on the dashboard (0 = all).
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Disable the progress spinner.
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose logging on stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Dashboard
        }
    }

    /// Analyzer toggles and path; numeric limits are left at their defaults
    /// and resolved later against the user config.
    pub fn analyze_settings(&self) -> AnalyzeSettings {
        AnalyzeSettings {
            git: !self.no_git,
            health: !self.no_health,
            todos: !self.no_todos,
            ..AnalyzeSettings::for_path(self.path.clone())
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            max_todo_items: self.max_todos,
            git_timeout_secs: self.git_timeout,
            top_languages: self.top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("repolyzer").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.output_format(), OutputFormat::Dashboard);
        let settings = cli.analyze_settings();
        assert!(settings.git && settings.health && settings.todos);
        let overrides = cli.overrides();
        assert!(overrides.max_todo_items.is_none());
        assert!(overrides.git_timeout_secs.is_none());
        assert!(overrides.top_languages.is_none());
    }

    #[test]
    fn skip_flags_disable_analyzers() {
        let settings = parse(&["--no-git", "--no-health", "--no-todos", "src"]).analyze_settings();
        assert!(!settings.git);
        assert!(!settings.health);
        assert!(!settings.todos);
        assert_eq!(settings.path, PathBuf::from("src"));
    }

    #[test]
    fn numeric_flags_become_overrides() {
        let cli = parse(&["--max-todos", "5", "--git-timeout", "3", "--top", "0", "--json"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.max_todo_items, Some(5));
        assert_eq!(overrides.git_timeout_secs, Some(3));
        assert_eq!(overrides.top_languages, Some(0));
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn zero_git_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["repolyzer", "--git-timeout", "0"]).is_err());
    }

    #[test]
    fn verbosity_counts_repetitions() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
        assert_eq!(parse(&["-v", "--verbose"]).verbose, 2);
    }
}
