//! Shared helpers for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every helper

use std::path::Path;
use std::process::{Command, Output};

/// Path to the meshpanel binary
pub fn meshpanel_bin() -> String {
    std::env::var("CARGO_BIN_EXE_meshpanel")
        .unwrap_or_else(|_| "target/release/meshpanel".to_string())
}

/// Creates a Command with an isolated config directory.
/// Pass the same directory to share state between invocations in one test.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(meshpanel_bin());
    cmd.env("MESHPANEL_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in `config_dir` and returns its output.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs a command expected to succeed and parses its stdout as JSON.
pub fn run_json(args: &[&str], config_dir: &Path) -> serde_json::Value {
    let output = run(args, config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command {args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}

/// Stdout as a lossy string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a lossy string.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
