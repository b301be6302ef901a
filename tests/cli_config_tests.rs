//! End-to-end tests for `meshpanel config` commands.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let result = run_json(&["config", "show", "--json"], temp_dir.path());
    assert!(result["ui"].is_object(), "Should have ui object");
    assert_eq!(result["ui"]["language"], "ar");
    assert_eq!(result["ui"]["direction"], "rtl");
    assert_eq!(result["ui"]["start_page"], "users");
    assert_eq!(result["ui"]["show_help_on_startup"], true);
}

#[test]
fn test_config_show_human_readable() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = run(&["config", "show"], temp_dir.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        stderr_of(&output)
    );
    let stdout = stdout_of(&output);
    assert!(stdout.contains("MeshPanel Configuration"));
    assert!(stdout.contains("Start Page: users"));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_language_and_start_page() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = run(
        &["config", "set", "--language", "en", "--start-page", "audit-logs"],
        temp_dir.path(),
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "Set should succeed. stderr: {}",
        stderr_of(&output)
    );

    let result = run_json(&["config", "show", "--json"], temp_dir.path());
    assert_eq!(result["ui"]["language"], "en");
    assert_eq!(result["ui"]["direction"], "ltr");
    assert_eq!(result["ui"]["start_page"], "audit-logs");

    assert!(temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_keeps_other_values() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    run(&["config", "set", "--language", "en"], temp_dir.path());
    run(&["config", "set", "--start-page", "logs"], temp_dir.path());

    let result = run_json(&["config", "show", "--json"], temp_dir.path());
    assert_eq!(result["ui"]["language"], "en");
    assert_eq!(result["ui"]["start_page"], "audit-logs");
}

#[test]
fn test_config_set_requires_an_option() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = run(&["config", "set"], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_invalid_language() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = run(&["config", "set", "--language", "fr"], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_show_rejects_corrupt_file() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("config.toml"), "[ui\nlanguage = ")
        .expect("Failed to write config");

    let output = run(&["config", "show"], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Failed to load configuration"));
}
