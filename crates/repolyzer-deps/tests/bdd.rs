//! BDD-style scenario tests for dependency counting.

use std::fs;

use repolyzer_deps::analyze_dependencies;
use tempfile::TempDir;

fn root_with(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().expect("failed to create tempdir");
    for (rel, content) in files {
        let path = tmp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    tmp
}

#[test]
fn given_package_json_when_analyzing_then_deps_and_dev_deps_are_counted() {
    // Given
    let tmp = root_with(&[(
        "package.json",
        r#"{"dependencies": {"react": "^18", "axios": "^1"}, "devDependencies": {"jest": "^29"}}"#,
    )]);

    // When
    let report = analyze_dependencies(tmp.path());

    // Then
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].name, "package.json");
    assert_eq!(report.files[0].path, "package.json");
    assert_eq!(report.files[0].count, 2);
    assert_eq!(report.files[0].dev_count, 1);
    assert_eq!(report.total_deps, 2);
    assert_eq!(report.total_dev_deps, 1);
}

#[test]
fn given_requirements_with_noise_when_analyzing_then_only_packages_count() {
    let tmp = root_with(&[(
        "requirements.txt",
        "flask>=2.0\nrequests\n# comment\n\n-r other.txt\n",
    )]);

    let report = analyze_dependencies(tmp.path());

    assert_eq!(report.total_deps, 2);
    assert_eq!(report.total_dev_deps, 0);
}

#[test]
fn given_several_manifests_when_analyzing_then_files_follow_registry_order() {
    let tmp = root_with(&[
        ("go.mod", "module m\n\nrequire example.com/x v1.0.0\n"),
        ("requirements.txt", "flask\nrequests\n"),
        ("package.json", r#"{"dependencies": {"express": "^4"}}"#),
    ]);

    let report = analyze_dependencies(tmp.path());

    let names: Vec<_> = report.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["package.json", "requirements.txt", "go.mod"]);
    assert_eq!(report.total_deps, 4);
}

#[test]
fn given_malformed_or_empty_manifests_when_analyzing_then_they_are_left_out() {
    let tmp = root_with(&[
        ("package.json", "not json"),
        ("composer.json", "{}"),
        ("Gemfile", "source 'https://rubygems.org'\n"),
        ("Cargo.toml", "[dependencies]\nserde = \"1\"\n"),
    ]);

    let report = analyze_dependencies(tmp.path());

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].name, "Cargo.toml");
}

#[test]
fn given_manifests_in_subdirectories_when_analyzing_then_they_are_not_discovered() {
    let tmp = root_with(&[
        ("frontend/package.json", r#"{"dependencies": {"vue": "^3"}}"#),
        ("backend/Cargo.toml", "[dependencies]\naxum = \"0.7\"\n"),
    ]);

    let report = analyze_dependencies(tmp.path());

    assert!(report.files.is_empty());
    assert_eq!(report.total_deps, 0);
}

#[test]
fn given_only_dev_dependencies_when_analyzing_then_the_file_is_reported() {
    let tmp = root_with(&[("package.json", r#"{"devDependencies": {"vitest": "^1"}}"#)]);

    let report = analyze_dependencies(tmp.path());

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].count, 0);
    assert_eq!(report.files[0].dev_count, 1);
}
