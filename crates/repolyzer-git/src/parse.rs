//! Parsers for git query output.

use repolyzer_types::{Contributor, LastCommit};

/// Subject, relative date and author separated by the ASCII unit separator,
/// which cannot appear in a commit subject line.
pub const LAST_COMMIT_FORMAT: &str = "--format=%s%x1f%ar%x1f%an";

const FIELD_SEP: char = '\u{1f}';

/// Non-empty lines.
#[must_use]
pub fn count_lines(out: &str) -> usize {
    out.lines().filter(|l| !l.trim().is_empty()).count()
}

/// A bare decimal count; anything else is 0.
#[must_use]
pub fn parse_count(out: &str) -> usize {
    out.trim().parse().unwrap_or(0)
}

#[must_use]
pub fn first_line(out: &str) -> String {
    out.lines().next().unwrap_or("").trim().to_string()
}

/// Parse `git shortlog -sn` output into the contributor count and every
/// well-formed `count<TAB>name` row, in output order.
pub fn parse_shortlog(out: &str) -> (usize, Vec<Contributor>) {
    let lines: Vec<&str> = out.lines().filter(|l| !l.trim().is_empty()).collect();
    let contributors = lines
        .iter()
        .filter_map(|line| {
            let (count, name) = line.trim().split_once('\t')?;
            Some(Contributor {
                name: name.trim().to_string(),
                commits: count.trim().parse().ok()?,
            })
        })
        .collect();
    (lines.len(), contributors)
}

/// Parse output of `git log -1` with [`LAST_COMMIT_FORMAT`].
pub fn parse_last_commit(out: &str) -> Option<LastCommit> {
    let line = out.lines().next()?;
    let mut fields = line.splitn(3, FIELD_SEP);
    let message = fields.next()?.to_string();
    let date = fields.next()?.to_string();
    let author = fields.next().unwrap_or("").to_string();
    Some(LastCommit {
        message,
        date,
        author,
    })
}
