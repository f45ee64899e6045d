//! # repolyzer
//!
//! **CLI Binary**
//!
//! This is the entry point for the `repolyzer` command-line application.
//! It wires the other crates together for a single analysis run.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Initialize logging and load the user config
//! * Drive the progress spinner while analyzers run
//! * Print the report and map errors to exit codes
//!
//! This crate should contain minimal business logic.

pub mod config;
mod error_hints;
mod logging;
pub mod progress;

use anyhow::Result;
use clap::Parser;
use repolyzer_config::Cli;
use repolyzer_settings::{resolve_analyze, resolve_dashboard};
use tracing::info;

use progress::Progress;

const START_MESSAGE: &str = "Scanning codebase...";

/// Run the `repolyzer` command line with the process arguments.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let user_config = config::load_config();
    let overrides = cli.overrides();
    let settings = resolve_analyze(cli.analyze_settings(), &overrides, user_config.as_ref());
    let dashboard = resolve_dashboard(&overrides, user_config.as_ref());
    let show_progress = !cli.no_progress
        && user_config
            .as_ref()
            .and_then(|c| c.progress)
            .unwrap_or(true);

    let progress = Progress::new(show_progress);
    progress.set_message(START_MESSAGE);
    let scan = repolyzer_core::analyze_with_progress(&settings, |stage| {
        progress.set_message(stage.message());
    })?;
    progress.finish_and_clear();

    info!(
        project = %scan.project,
        files = scan.analysis.structure.total_files,
        elapsed_ms = scan.elapsed.as_millis() as u64,
        "analysis complete"
    );
    repolyzer_format::print_scan(&scan, cli.output_format(), &dashboard)
}

/// Render an error and any matching hints for stderr.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
