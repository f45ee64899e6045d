//! Progress spinner for the analysis run.

use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// Environment variable that turns the spinner off when set.
pub const NO_PROGRESS_ENV: &str = "REPOLYZER_NO_PROGRESS";

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];

/// A spinner on stderr that is a no-op when hidden.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Create a progress indicator.
    ///
    /// The spinner is only shown if:
    /// - `enabled` is true
    /// - stderr is a TTY
    /// - NO_COLOR env var is not set
    /// - REPOLYZER_NO_PROGRESS env var is not set
    pub fn new(enabled: bool) -> Self {
        let bar = (enabled && is_interactive()).then(|| {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
                pb.set_style(style.tick_strings(TICKS));
            }
            pb.enable_steady_tick(Duration::from_millis(80));
            pb
        });
        Self { bar }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    pub fn set_message(&self, msg: impl Into<String>) {
        if let Some(bar) = &self.bar {
            bar.set_message(msg.into());
        }
    }

    /// Finish and clear the spinner.
    pub fn finish_and_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.finish_and_clear();
    }
}

fn is_interactive() -> bool {
    Term::stderr().is_term()
        && std::env::var_os("NO_COLOR").is_none()
        && std::env::var_os(NO_PROGRESS_ENV).is_none()
}
