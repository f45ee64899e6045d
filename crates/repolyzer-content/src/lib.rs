//! # repolyzer-content
//!
//! **Tier 2 (Utilities)**
//!
//! Content scanning helpers: permissive text reading, line counting and the
//! code-marker scanner.
//!
//! ## What belongs here
//! * Reading file contents with lossy UTF-8 decoding
//! * Line counting
//! * Marker (TODO/FIXME/...) detection
//!
//! ## What does NOT belong here
//! * Directory traversal (use repolyzer-walk)
//! * Per-language aggregation (use repolyzer-scan)

pub mod markers;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use markers::{first_marker, scan_markers, truncate_text};

/// Read a whole file, replacing invalid UTF-8 sequences instead of failing.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

/// Iterate the lines of `text`, ending each line at `\n`, `\r\n` or a bare
/// `\r`. Terminators are not included and a trailing one does not start an
/// extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(idx) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..idx];
        let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + terminator..];
        Some(line)
    })
}

/// Number of lines in `text`. A trailing newline does not start a new line,
/// so `"a\nb"` and `"a\nb\n"` both count 2 and the empty string counts 0.
/// Old Mac `\r` endings count like `\n`.
///
/// # Examples
///
/// ```
/// use repolyzer_content::count_lines;
///
/// assert_eq!(count_lines(""), 0);
/// assert_eq!(count_lines("a\nb"), 2);
/// assert_eq!(count_lines("a\nb\n"), 2);
/// assert_eq!(count_lines("a\rb\rc\r"), 3);
/// ```
#[must_use]
pub fn count_lines(text: &str) -> usize {
    split_lines(text).count()
}

/// Line count of a file, or 0 when it cannot be read.
pub fn count_file_lines(path: &Path) -> usize {
    match read_text_lossy(path) {
        Ok(text) => count_lines(&text),
        Err(err) => {
            tracing::debug!(error = %err, "counting unreadable file as empty");
            0
        }
    }
}
