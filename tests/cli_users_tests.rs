//! End-to-end tests for `meshpanel users`.

mod fixtures;
use fixtures::*;

fn names(result: &serde_json::Value) -> Vec<String> {
    result["users"]
        .as_array()
        .expect("users should be an array")
        .iter()
        .map(|user| user["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_users_lists_everyone_by_default() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let result = run_json(&["users", "--json"], temp_dir.path());
    assert_eq!(result["total"], 6);
    assert_eq!(result["shown"], 6);
    assert_eq!(names(&result).len(), 6);
}

#[test]
fn test_users_search_is_case_insensitive() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let result = run_json(&["users", "--search", "SARAH", "--json"], temp_dir.path());
    assert_eq!(names(&result), vec!["Sarah Johnson"]);
    assert_eq!(result["shown"], 1);
    assert_eq!(result["total"], 6);
}

#[test]
fn test_users_search_matches_department() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let result = run_json(&["users", "-s", "engineering", "--json"], temp_dir.path());
    assert_eq!(names(&result), vec!["John Doe", "Alex Rodriguez"]);
}

#[test]
fn test_users_role_filter() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let result = run_json(&["users", "--role", "Admin", "--json"], temp_dir.path());
    assert_eq!(result["shown"], 2);
    let users = result["users"].as_array().expect("users should be an array");
    assert!(users.iter().all(|user| user["role"] == "Admin"));
}

#[test]
fn test_users_search_and_role_combine() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let result = run_json(
        &["users", "--search", "sarah", "--role", "Viewer", "--json"],
        temp_dir.path(),
    );
    assert_eq!(result["shown"], 0);
    assert!(names(&result).is_empty());
}

#[test]
fn test_users_counts_cover_whole_dataset() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    // Counts describe every user, not just the filtered view
    let result = run_json(&["users", "--search", "sarah", "--json"], temp_dir.path());
    assert_eq!(result["shown"], 1);
    assert_eq!(result["counts"]["total"], 6);
    assert_eq!(result["counts"]["active"], 5);
    assert_eq!(result["counts"]["admins"], 2);
}

#[test]
fn test_users_human_readable_counts() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = run(&["users", "--role", "Viewer"], temp_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Total: 6  Active: 5  Admins: 2"));
}

#[test]
fn test_users_human_readable_footer() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = run(&["users", "--search", "zz-no-match"], temp_dir.path());
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Showing 0 of 6"));
}

#[test]
fn test_users_invalid_role() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");

    let output = run(&["users", "--role", "admin"], temp_dir.path());
    assert_eq!(output.status.code(), Some(1), "Roles match exactly");
    assert!(stderr_of(&output).contains("Invalid role 'admin'"));
}
