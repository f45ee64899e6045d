//! Per-format manifest parsers.
//!
//! All parsers are heuristics over the raw text. Only the JSON formats use a
//! real grammar; everything else tracks at most a current section.

use anyhow::{Context, Result};
use repolyzer_types::DependencyCounts;
use serde_json::Value;

/// Which bucket a manifest section feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Other,
    Deps,
    Dev,
}

impl Section {
    fn bump(self, counts: &mut DependencyCounts) {
        match self {
            Section::Deps => counts.deps += 1,
            Section::Dev => counts.dev += 1,
            Section::Other => {}
        }
    }
}

fn json_entries(doc: &Value, key: &str) -> usize {
    match doc.get(key) {
        Some(Value::Object(map)) => map.len(),
        Some(Value::Array(items)) => items.len(),
        _ => 0,
    }
}

fn parse_json_manifest(text: &str, deps_key: &str, dev_key: &str) -> Result<DependencyCounts> {
    let doc: Value = serde_json::from_str(text).context("invalid JSON")?;
    Ok(DependencyCounts::new(
        json_entries(&doc, deps_key),
        json_entries(&doc, dev_key),
    ))
}

/// `dependencies` / `devDependencies` entries.
pub fn parse_package_json(text: &str) -> Result<DependencyCounts> {
    parse_json_manifest(text, "dependencies", "devDependencies")
}

/// `require` / `require-dev` entries.
pub fn parse_composer_json(text: &str) -> Result<DependencyCounts> {
    parse_json_manifest(text, "require", "require-dev")
}

/// Non-blank lines that are neither comments nor pip options (`-r`, `-e`, ...).
pub fn parse_requirements_txt(text: &str) -> Result<DependencyCounts> {
    let deps = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with('-'))
        .count();
    Ok(DependencyCounts::new(deps, 0))
}

/// `key = value` lines under `[packages]` and `[dev-packages]`.
pub fn parse_pipfile(text: &str) -> Result<DependencyCounts> {
    let mut counts = DependencyCounts::default();
    let mut section = Section::Other;
    for line in text.lines().map(str::trim) {
        if line.starts_with('[') {
            section = match line {
                "[packages]" => Section::Deps,
                "[dev-packages]" => Section::Dev,
                _ => Section::Other,
            };
        } else if line.contains('=') {
            section.bump(&mut counts);
        }
    }
    Ok(counts)
}

/// `key = value` lines under exactly `[dependencies]` and `[dev-dependencies]`.
///
/// Target-specific and workspace tables are not counted.
pub fn parse_cargo_toml(text: &str) -> Result<DependencyCounts> {
    let mut counts = DependencyCounts::default();
    let mut section = Section::Other;
    for line in text.lines().map(str::trim) {
        if line.starts_with('[') {
            section = match line {
                "[dependencies]" => Section::Deps,
                "[dev-dependencies]" => Section::Dev,
                _ => Section::Other,
            };
        } else if line.contains('=') && !line.starts_with('#') {
            section.bump(&mut counts);
        }
    }
    Ok(counts)
}

/// Header-name heuristic for pyproject files.
///
/// A bracketed header containing `dependencies` (and neither `dev` nor
/// `optional`) opens a runtime section; one containing both `dev` and
/// `dependencies` opens a dev section. Inside either, quoted lines and
/// `key = value` lines count. A PEP 621 `dependencies = [...]` array (or
/// `dev-dependencies = [...]`) counts its quoted entries. Any other table whose
/// name happens to contain these words is misread; this is not a TOML parser.
pub fn parse_pyproject_toml(text: &str) -> Result<DependencyCounts> {
    let mut counts = DependencyCounts::default();
    let mut section = Section::Other;
    let mut array: Option<Section> = None;

    for line in text.lines().map(str::trim) {
        if let Some(target) = array {
            let closes = line.starts_with(']') || line.trim_end_matches(',').ends_with(']');
            let body = if closes {
                line.rfind(']').map_or(line, |end| &line[..end])
            } else {
                line
            };
            for _ in 0..quoted_items(body) {
                target.bump(&mut counts);
            }
            if closes {
                array = None;
            }
            continue;
        }

        if line.starts_with('[') {
            section = pyproject_header(line);
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let target = pyproject_array_key(key.trim());
            let value = value.trim();
            if target != Section::Other && value.starts_with('[') {
                let body = &value[1..];
                let body = match body.rfind(']') {
                    Some(end) => &body[..end],
                    None => {
                        array = Some(target);
                        body
                    }
                };
                for _ in 0..quoted_items(body) {
                    target.bump(&mut counts);
                }
                continue;
            }
        }

        if section != Section::Other
            && !line.starts_with('#')
            && (is_quoted(line) || line.contains('='))
        {
            section.bump(&mut counts);
        }
    }
    Ok(counts)
}

fn is_quoted(s: &str) -> bool {
    s.starts_with('"') || s.starts_with('\'')
}

fn quoted_items(list: &str) -> usize {
    list.split(',').map(str::trim).filter(|item| is_quoted(item)).count()
}

fn pyproject_header(header: &str) -> Section {
    let lower = header.to_ascii_lowercase();
    let has_deps = lower.contains("dependencies");
    let has_dev = lower.contains("dev");
    if has_deps && !has_dev && !lower.contains("optional") {
        Section::Deps
    } else if has_deps && has_dev {
        Section::Dev
    } else {
        Section::Other
    }
}

fn pyproject_array_key(key: &str) -> Section {
    match key.trim_matches('"') {
        "dependencies" => Section::Deps,
        "dev-dependencies" | "dev_dependencies" => Section::Dev,
        _ => Section::Other,
    }
}

/// Lines inside `require ( ... )` blocks, plus single-line `require` statements.
pub fn parse_go_mod(text: &str) -> Result<DependencyCounts> {
    let mut deps = 0;
    let mut in_require = false;
    for line in text.lines().map(str::trim) {
        if line.starts_with("require (") {
            in_require = true;
        } else if line == ")" {
            in_require = false;
        } else if in_require {
            if !line.is_empty() && !line.starts_with("//") {
                deps += 1;
            }
        } else if line.starts_with("require ") && !line.contains('(') {
            deps += 1;
        }
    }
    Ok(DependencyCounts::new(deps, 0))
}

/// Lines starting with `gem `.
pub fn parse_gemfile(text: &str) -> Result<DependencyCounts> {
    let deps = text
        .lines()
        .filter(|l| l.trim_start().starts_with("gem "))
        .count();
    Ok(DependencyCounts::new(deps, 0))
}

/// Occurrences of `<dependency>`.
pub fn parse_pom_xml(text: &str) -> Result<DependencyCounts> {
    Ok(DependencyCounts::new(text.matches("<dependency>").count(), 0))
}

/// Configuration keywords per line; test configurations count as dev.
pub fn parse_gradle(text: &str) -> Result<DependencyCounts> {
    let mut counts = DependencyCounts::default();
    for line in text.lines() {
        if ["implementation ", "compile ", "api "]
            .iter()
            .any(|kw| line.contains(kw))
        {
            counts.deps += 1;
        }
        if ["testImplementation ", "testCompile "]
            .iter()
            .any(|kw| line.contains(kw))
        {
            counts.dev += 1;
        }
    }
    Ok(counts)
}

/// Indented `key:` lines under top-level `dependencies:` and `dev_dependencies:`.
pub fn parse_pubspec(text: &str) -> Result<DependencyCounts> {
    let mut counts = DependencyCounts::default();
    let mut section = Section::Other;
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let indented = line.starts_with(' ') || line.starts_with('\t');
        if !indented {
            section = match trimmed {
                "dependencies:" => Section::Deps,
                "dev_dependencies:" => Section::Dev,
                _ => Section::Other,
            };
        } else if trimmed.contains(':') {
            section.bump(&mut counts);
        }
    }
    Ok(counts)
}

/// Occurrences of `{:`, the start of each dependency tuple.
pub fn parse_mix(text: &str) -> Result<DependencyCounts> {
    Ok(DependencyCounts::new(text.matches("{:").count(), 0))
}
