//! BDD-style scenario tests for the health checklist.

use std::fs;
use std::path::Path;

use repolyzer_health::{CHECKS, analyze_health};
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}

#[test]
fn given_every_indicator_when_checking_health_then_score_is_100() {
    // Given one candidate for each check
    let tmp = TempDir::new().unwrap();
    for rel in [
        "README.md",
        "LICENSE",
        ".gitignore",
        ".gitlab-ci.yml",
        "Dockerfile",
        "CONTRIBUTING.md",
        "CHANGELOG.md",
        "SECURITY.md",
        ".editorconfig",
    ] {
        touch(tmp.path(), rel);
    }
    fs::create_dir(tmp.path().join("tests")).unwrap();

    // When
    let report = analyze_health(tmp.path());

    // Then
    assert_eq!(report.score, 100);
    assert!(report.checks.iter().all(|c| c.passed));
    assert_eq!(report.checks[3].detail, ".gitlab-ci.yml");
    assert_eq!(report.checks[4].detail, "tests");
}

#[test]
fn given_no_indicators_when_checking_health_then_score_is_0() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "src/main.rs");

    let report = analyze_health(tmp.path());

    assert_eq!(report.score, 0);
    assert_eq!(report.checks.len(), CHECKS.len());
}

#[test]
fn given_half_the_indicators_when_checking_health_then_score_is_50() {
    let tmp = TempDir::new().unwrap();
    for rel in ["README", "COPYING", ".gitignore", "Jenkinsfile", "setup.cfg"] {
        touch(tmp.path(), rel);
    }

    let report = analyze_health(tmp.path());

    assert_eq!(report.passed(), 5);
    assert_eq!(report.score, 50);
}

#[test]
fn given_a_test_file_instead_of_a_directory_when_checking_health_then_it_still_passes() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "spec");

    let report = analyze_health(tmp.path());

    let tests = &report.checks[4];
    assert!(tests.passed);
    assert_eq!(tests.detail, "spec");
}
