//! Helper utilities for snapshot testing CLI output with insta.
//!
//! Runs the built binary and normalizes dynamic content like temp paths and
//! version numbers before output is compared.

use regex::Regex;
use std::path::Path;
use std::process::Command;

/// Result of running a CLI command
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: Option<i32>,
}

/// Normalized snapshot settings for redactions
pub struct SnapshotSettings {
    pub normalize_paths: bool,
    pub normalize_versions: bool,
}

/// Default settings for CLI output
pub fn cli_snapshot_settings() -> SnapshotSettings {
    SnapshotSettings {
        normalize_paths: true,
        normalize_versions: true,
    }
}

/// Get the path to the pantheon-lint binary for testing
pub fn get_binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_pantheon-lint")
}

/// Run a pantheon-lint command and return the result
pub fn run_pantheon_lint_command(args: &[&str], working_dir: Option<&Path>) -> CommandResult {
    run_pantheon_lint_command_with_env(args, &[], working_dir)
}

/// Run a pantheon-lint command with custom environment variables
pub fn run_pantheon_lint_command_with_env(
    args: &[&str],
    env_vars: &[(&str, &str)],
    working_dir: Option<&Path>,
) -> CommandResult {
    let mut cmd = Command::new(get_binary_path());
    cmd.args(args).env_remove("RUST_LOG");
    if let Some(dir) = working_dir {
        cmd.current_dir(dir);
    }
    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("Failed to execute command");

    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
        exit_code: output.status.code(),
    }
}

/// Normalize output for snapshot testing by removing dynamic content
pub fn normalize_snapshot_output(output: &str, settings: &SnapshotSettings) -> String {
    let mut result = output.to_string();

    if settings.normalize_paths {
        // Normalize temporary directory paths
        result = Regex::new(r"(/private)?/(tmp|var/folders)/[^\s]+")
            .unwrap()
            .replace_all(&result, "[TEMP_DIR]")
            .to_string();

        // Normalize Windows paths if any
        result = Regex::new(r"[A-Z]:\\[^\s]+")
            .unwrap()
            .replace_all(&result, "[WINDOWS_PATH]")
            .to_string();
    }

    if settings.normalize_versions {
        result = Regex::new(r"\d+\.\d+\.\d+(-[a-zA-Z0-9.-]+)?")
            .unwrap()
            .replace_all(&result, "[VERSION]")
            .to_string();
    }

    result
}

#[test]
fn test_normalize_snapshot_output() {
    let normalized = normalize_snapshot_output(
        "pantheon-lint 0.3.0 read /tmp/.tmpAbC123/pantheon2.yml",
        &cli_snapshot_settings(),
    );
    assert_eq!(normalized, "pantheon-lint [VERSION] read [TEMP_DIR]");
}
