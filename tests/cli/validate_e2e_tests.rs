//! End-to-end tests for the validate command

use super::snapshot_helpers::{
    cli_snapshot_settings, normalize_snapshot_output, run_pantheon_lint_command,
    run_pantheon_lint_command_with_env,
};
use super::test_helpers::{TestRepo, VALID_DESCRIPTOR};

#[test]
fn test_validate_clean_repository() {
    let repo = TestRepo::valid();

    let result = run_pantheon_lint_command(&["validate"], Some(repo.path()));

    assert!(result.success, "stdout: {}\nstderr: {}", result.stdout, result.stderr);
    assert!(result.stdout.contains("[OK] pantheon2.yml passed validation"));
    assert!(!result.stdout.contains("FAIL"));
}

#[test]
fn test_validate_discovers_descriptor_from_subdirectory() {
    let repo = TestRepo::valid();

    let result = run_pantheon_lint_command(&["validate"], Some(&repo.path().join("modules/core")));

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("passed validation"));
}

#[test]
fn test_validate_missing_attribute_file_is_reported() {
    let repo = TestRepo::valid();
    repo.write(
        "pantheon2.yml",
        &VALID_DESCRIPTOR.replace("build/attributes.adoc", "build/missing.adoc"),
    );

    let result = run_pantheon_lint_command(&["validate"], Some(repo.path()));

    assert_eq!(result.exit_code, Some(0));
    assert!(result
        .stdout
        .contains("[WARNING] Your pantheon2.yml has the following errors:"));
    assert!(result.stdout.contains(
        "FAIL: the following files or directories do not exist in your repository:\n\tbuild/missing.adoc\n"
    ));
}

#[test]
fn test_validate_canonical_false_and_icons() {
    let repo = TestRepo::valid();
    repo.write(
        "pantheon2.yml",
        &VALID_DESCRIPTOR.replace("canonical: true", "canonical: false"),
    );
    repo.write(
        "build/attributes.adoc",
        ":product: Pantheon\n:icons: font\n// :toc: left\n",
    );

    let result = run_pantheon_lint_command(&["validate"], Some(repo.path()));

    assert!(result.success);
    assert!(result
        .stdout
        .contains("FAIL: the following key is not set to True:\n\tcannonical\n"));
    assert!(result
        .stdout
        .contains("FAIL: the following icons attribute:\n\tbuild/attributes.adoc\n"));
    // Commented-out attributes are stripped before content checks
    assert!(!result.stdout.contains(":toc:"));
}

#[test]
fn test_validate_missing_top_level_keys_exits_2() {
    let repo = TestRepo::new();
    repo.write("pantheon2.yml", "server: https://pantheon.example.com\n");

    let result = run_pantheon_lint_command(&["validate"], Some(repo.path()));

    assert_eq!(result.exit_code, Some(2));
    assert!(result
        .stdout
        .contains("Your pantheon2.yml is missing the following keys:"));
    assert!(result.stdout.contains("\tassemblies\n\tmodules\n\trepository\n\tresources\n\tvariants\n"));
    assert!(result.stdout.contains("Total: 5"));
    assert!(!result.stdout.contains("FAIL"));
    assert!(result.stderr.contains("[ERROR]"));
}

#[test]
fn test_validate_empty_top_level_keys_exits_2() {
    let repo = TestRepo::new();
    repo.write(
        "pantheon2.yml",
        "server: x\nrepository: y\nvariants:\nassemblies: []\nmodules: []\nresources:\n",
    );

    let result = run_pantheon_lint_command(&["validate"], Some(repo.path()));

    assert_eq!(result.exit_code, Some(2));
    assert!(result
        .stdout
        .contains("has the following keys with no value:\n\n\tresources\n\tvariants\n"));
    assert!(result.stdout.contains("Total: 2"));
}

#[test]
fn test_validate_empty_descriptor_exits_2() {
    let repo = TestRepo::new();
    repo.write("pantheon2.yml", "");

    let result = run_pantheon_lint_command(&["validate"], Some(repo.path()));

    assert_eq!(result.exit_code, Some(2));
    assert!(result.stderr.contains("[ERROR]"));
    assert!(!result.stdout.contains("FAIL"));
}

#[test]
fn test_validate_syntax_error_exits_2() {
    let repo = TestRepo::new();
    repo.write("pantheon2.yml", "server: [unclosed\nrepository: y\n");

    let result = run_pantheon_lint_command(&["validate"], Some(repo.path()));

    assert_eq!(result.exit_code, Some(2));
    assert!(result.stderr.contains("[INFO] Fix the syntax error"));
    assert!(!result.stdout.contains("FAIL"));
}

#[test]
fn test_validate_without_descriptor_exits_1() {
    let repo = TestRepo::new();

    let result = run_pantheon_lint_command(&["validate"], Some(repo.path()));

    assert_eq!(result.exit_code, Some(1));
    let first_line = result.stderr.lines().next().unwrap_or_default();
    let normalized = normalize_snapshot_output(first_line, &cli_snapshot_settings());
    insta::assert_snapshot!(
        normalized,
        @"[ERROR] pantheon2.yml not found in [TEMP_DIR] or any parent directory"
    );
}

#[test]
fn test_validate_explicit_file() {
    let repo = TestRepo::valid();
    let elsewhere = TestRepo::new();
    let file = repo.path().join("pantheon2.yml");

    let result = run_pantheon_lint_command(
        &["validate", "--file", file.to_str().unwrap()],
        Some(elsewhere.path()),
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("passed validation"));
}

#[test]
fn test_validate_config_file_names_descriptor() {
    let repo = TestRepo::valid();
    std::fs::rename(repo.path().join("pantheon2.yml"), repo.path().join("site.yml")).unwrap();
    repo.write(".pantheon-lint.toml", "descriptor = \"site.yml\"\n");

    let result = run_pantheon_lint_command(&["validate"], Some(repo.path()));

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("[OK] site.yml passed validation"));
}

#[test]
fn test_validate_content_inventory_can_be_disabled() {
    let repo = TestRepo::valid();
    repo.write(
        "pantheon2.yml",
        &VALID_DESCRIPTOR.replace("modules/**/*.adoc", "modules/**/ref_*.adoc"),
    );

    let checked = run_pantheon_lint_command(&["validate"], Some(repo.path()));
    assert!(checked.success);
    assert!(checked.stdout.contains("\tmodules/**/ref_*.adoc\n"));

    let skipped = run_pantheon_lint_command(
        &["validate", "--no-content-inventory"],
        Some(repo.path()),
    );
    assert!(skipped.success);
    assert!(skipped.stdout.contains("passed validation"));
}

#[test]
fn test_validate_verbose_diagnostics_go_to_stderr() {
    let repo = TestRepo::valid();

    let result = run_pantheon_lint_command_with_env(
        &["validate", "--verbose"],
        &[("NO_COLOR", "1")],
        Some(repo.path()),
    );

    assert!(result.success);
    assert!(result.stderr.contains("[INFO] Validating"));
    assert!(!result.stdout.contains("Validating"));
    assert!(!result.stdout.contains("DEBUG"));
    assert!(result.stdout.contains("passed validation"));
}
