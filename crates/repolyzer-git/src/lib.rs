//! # repolyzer-git
//!
//! **Tier 3 (Analyzers)**
//!
//! Summarizes a repository's git history by running a fixed sequence of
//! read-only `git` queries. Git is optional: when the binary is missing, a
//! query cannot be spawned, or a query outlives its timeout, the whole report
//! falls back to [`GitReport::default`].
//!
//! ## What belongs here
//! * Invoking the git CLI with environment isolation and a timeout
//! * Parsing query output into a [`GitReport`]
//!
//! ## What does NOT belong here
//! * Git history modification
//! * Per-file churn or blame analysis

pub mod parse;

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow, bail};
use repolyzer_types::{GitReport, TOP_CONTRIBUTORS_LIMIT};
use tracing::debug;

/// Default per-query timeout.
pub const DEFAULT_GIT_TIMEOUT: Duration = Duration::from_secs(10);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Create a `Command` for git with process-environment isolation.
///
/// Strips `GIT_DIR` and `GIT_WORK_TREE` so inherited variables cannot
/// override the explicit `-C` path.
fn git_cmd() -> Command {
    let mut cmd = Command::new("git");
    cmd.env_remove("GIT_DIR").env_remove("GIT_WORK_TREE");
    cmd
}

pub fn git_available() -> bool {
    git_cmd()
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Runs one git query against a repository.
pub trait GitRunner {
    /// Run `git <args>` in `root` and return its trimmed stdout.
    ///
    /// A non-zero exit status is not an error; its stdout is returned as-is.
    /// Errors mean git could not be run to completion.
    fn run(&self, root: &Path, args: &[&str]) -> Result<String>;
}

/// [`GitRunner`] backed by the `git` binary on `PATH`.
#[derive(Debug, Clone, Copy)]
pub struct SystemGit {
    timeout: Duration,
}

impl SystemGit {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_TIMEOUT)
    }
}

impl GitRunner for SystemGit {
    fn run(&self, root: &Path, args: &[&str]) -> Result<String> {
        let mut child = git_cmd()
            .arg("-C")
            .arg(root)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to spawn git {}", args.join(" ")))?;

        let mut stdout = child.stdout.take().context("Missing git stdout")?;
        let reader = thread::spawn(move || {
            let mut buf = Vec::new();
            stdout.read_to_end(&mut buf).map(|_| buf)
        });

        let deadline = Instant::now() + self.timeout;
        loop {
            if child.try_wait().context("Failed to wait for git")?.is_some() {
                break;
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                bail!(
                    "git {} timed out after {}s",
                    args.join(" "),
                    self.timeout.as_secs_f64()
                );
            }
            thread::sleep(POLL_INTERVAL);
        }

        let bytes = reader
            .join()
            .map_err(|_| anyhow!("git output reader panicked"))?
            .context("Failed to read git output")?;
        Ok(String::from_utf8_lossy(&bytes).trim().to_string())
    }
}

/// Summarize the repository at `root` using the system git binary.
pub fn analyze_git(root: &Path, timeout: Duration) -> GitReport {
    analyze_git_with(root, &SystemGit::new(timeout))
}

/// Summarize the repository at `root` through `runner`.
///
/// Returns the default (non-repository) report when `root/.git` is absent or
/// any query fails to run.
pub fn analyze_git_with<R: GitRunner + ?Sized>(root: &Path, runner: &R) -> GitReport {
    if !root.join(".git").exists() {
        return GitReport::default();
    }
    match collect(root, runner) {
        Ok(report) => report,
        Err(err) => {
            debug!(error = %format!("{err:#}"), "git unavailable; reporting no repository");
            GitReport::default()
        }
    }
}

fn collect<R: GitRunner + ?Sized>(root: &Path, runner: &R) -> Result<GitReport> {
    let git = |args: &[&str]| runner.run(root, args);

    let current_branch = git(&["rev-parse", "--abbrev-ref", "HEAD"])?;
    let commits = parse::parse_count(&git(&["rev-list", "--count", "HEAD"])?);
    let branches = parse::count_lines(&git(&["branch", "--list"])?);
    let tags = parse::count_lines(&git(&["tag", "--list"])?);
    let (contributors, mut top_contributors) =
        parse::parse_shortlog(&git(&["shortlog", "-sn", "--no-merges", "HEAD"])?);
    top_contributors.truncate(TOP_CONTRIBUTORS_LIMIT);
    let last_commit = parse::parse_last_commit(&git(&["log", "-1", parse::LAST_COMMIT_FORMAT])?);
    let first_commit_date = parse::first_line(&git(&["log", "--reverse", "--format=%ar"])?);
    let remote_url = git(&["remote", "get-url", "origin"])?;
    let uncommitted_changes = parse::count_lines(&git(&["status", "--porcelain"])?);

    Ok(GitReport {
        is_git_repo: true,
        commits,
        branches,
        tags,
        contributors,
        current_branch,
        last_commit,
        first_commit_date,
        remote_url,
        uncommitted_changes,
        top_contributors,
    })
}
