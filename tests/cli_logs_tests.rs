//! End-to-end tests for `meshpanel logs`.

mod fixtures;
use fixtures::*;

fn actions(result: &serde_json::Value) -> Vec<String> {
    result["entries"]
        .as_array()
        .expect("entries should be an array")
        .iter()
        .map(|entry| entry["action"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_logs_counts_cover_all_entries() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let result = run_json(&["logs", "--json"], temp_dir.path());
    assert_eq!(result["total"], 8);
    assert_eq!(result["shown"], 8);
    assert_eq!(result["counts"]["total"], 8);
    assert_eq!(result["counts"]["info"], 5);
    assert_eq!(result["counts"]["warning"], 2);
    assert_eq!(result["counts"]["error"], 1);
}

#[test]
fn test_logs_severity_filter() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let result = run_json(&["logs", "--severity", "error", "--json"], temp_dir.path());
    assert_eq!(actions(&result), vec!["security.failed_login"]);

    // Counts describe the whole log, not the filtered view
    assert_eq!(result["counts"]["total"], 8);
}

#[test]
fn test_logs_search_and_severity_combine() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let result = run_json(&["logs", "--search", "LOGIN", "--json"], temp_dir.path());
    assert_eq!(actions(&result), vec!["user.login", "security.failed_login"]);

    let result = run_json(
        &["logs", "--search", "login", "--severity", "info", "--json"],
        temp_dir.path(),
    );
    assert_eq!(actions(&result), vec!["user.login"]);
}

#[test]
fn test_logs_search_matches_details_and_user() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let result = run_json(&["logs", "-s", "sarah johnson", "--json"], temp_dir.path());
    assert_eq!(
        actions(&result),
        vec!["user.permission_change", "data.export"]
    );
}

#[test]
fn test_logs_human_readable() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = run(&["logs", "--severity", "warning"], temp_dir.path());
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Total: 8  Errors: 1  Warnings: 2  Info: 5"));
    assert!(stdout.contains("api.rate_limit"));
    assert!(stdout.contains("Showing 2 of 8"));
}

#[test]
fn test_logs_invalid_severity() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = run(&["logs", "--severity", "critical"], temp_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Invalid severity"));
}
