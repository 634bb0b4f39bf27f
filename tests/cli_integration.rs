//! Integration tests for the `mt` CLI.
//!
//! Each test points `mt` at a temp data directory with `-C`, runs it as a
//! subprocess, and checks stdout and/or the stored JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `mt` binary.
fn mt_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("mt");
    path
}

/// Run `mt -C <dir> <args>`, returning (stdout, stderr, success).
fn run_mt(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(mt_bin())
        .arg("-C")
        .arg(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("MYTASKS_DIR")
        .output()
        .expect("failed to run mt");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `mt` expecting success, return stdout.
fn run_mt_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_mt(dir, args);
    if !success {
        panic!(
            "mt {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

/// Add a task and return its id
fn add(dir: &Path, title: &str) -> String {
    run_mt_ok(dir, &["add", title]).trim().to_string()
}

/// Parsed contents of the stored sequence
fn stored(dir: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(dir.join("tasks.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn stored_titles(dir: &Path) -> Vec<String> {
    stored(dir)
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Add / list
// ---------------------------------------------------------------------------

#[test]
fn test_add_writes_through() {
    let tmp = tempfile::TempDir::new().unwrap();
    let id = add(tmp.path(), "Buy milk");
    assert!(id.parse::<u64>().is_ok(), "id should be numeric: {id}");

    let value = stored(tmp.path());
    assert_eq!(value[0]["title"], "Buy milk");
    assert_eq!(value[0]["completed"], false);
    assert_eq!(value[0]["id"].as_u64().unwrap().to_string(), id);
}

#[test]
fn test_add_joins_words() {
    let tmp = tempfile::TempDir::new().unwrap();
    run_mt_ok(tmp.path(), &["add", "Walk", "the", "dog"]);
    assert_eq!(stored_titles(tmp.path()), vec!["Walk the dog"]);
}

#[test]
fn test_add_rejects_blank_title() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_mt(tmp.path(), &["add", "   "]);
    assert!(!success);
    assert!(stderr.contains("cannot be empty"));
    assert!(!tmp.path().join("tasks.json").exists());
}

#[test]
fn test_rapid_adds_get_unique_ids() {
    let tmp = tempfile::TempDir::new().unwrap();
    let ids: Vec<String> = (0..5).map(|i| add(tmp.path(), &format!("t{i}"))).collect();
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 5);
}

#[test]
fn test_list_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_mt_ok(tmp.path(), &["list"]);
    assert!(out.contains("No tasks"));
    assert!(out.contains("0 tasks left"));
}

#[test]
fn test_list_in_order_with_footer() {
    let tmp = tempfile::TempDir::new().unwrap();
    add(tmp.path(), "first");
    add(tmp.path(), "second");
    let out = run_mt_ok(tmp.path(), &["list"]);
    let first = out.find("first").unwrap();
    let second = out.find("second").unwrap();
    assert!(first < second);
    assert!(out.contains("1. [ ]"));
    assert!(out.contains("2 tasks left"));
}

#[test]
fn test_list_filters() {
    let tmp = tempfile::TempDir::new().unwrap();
    let done = add(tmp.path(), "done one");
    add(tmp.path(), "open one");
    run_mt_ok(tmp.path(), &["toggle", &done]);

    let out = run_mt_ok(tmp.path(), &["list", "--completed"]);
    assert!(out.contains("done one"));
    assert!(!out.contains("open one"));

    let out = run_mt_ok(tmp.path(), &["list", "--remaining"]);
    assert!(!out.contains("done one"));
    // Original position is kept in filtered output
    assert!(out.contains("2. [ ]"));
}

#[test]
fn test_list_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    add(tmp.path(), "a");
    add(tmp.path(), "b");
    let out = run_mt_ok(tmp.path(), &["list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[1]["position"], 2);
    assert_eq!(arr[1]["title"], "b");
    assert_eq!(arr[1]["completed"], false);
}

// ---------------------------------------------------------------------------
// Edit / toggle / rm
// ---------------------------------------------------------------------------

#[test]
fn test_edit_title() {
    let tmp = tempfile::TempDir::new().unwrap();
    let id = add(tmp.path(), "Buy milk");
    run_mt_ok(tmp.path(), &["edit", &id, "Buy", "oat", "milk"]);
    assert_eq!(stored_titles(tmp.path()), vec!["Buy oat milk"]);
}

#[test]
fn test_edit_missing_id_is_silent_noop() {
    let tmp = tempfile::TempDir::new().unwrap();
    add(tmp.path(), "keep");
    let (_, stderr, success) = run_mt(tmp.path(), &["edit", "1", "changed"]);
    assert!(success);
    assert!(stderr.contains("no task with id 1"));
    assert_eq!(stored_titles(tmp.path()), vec!["keep"]);
}

#[test]
fn test_invalid_id_is_an_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (_, stderr, success) = run_mt(tmp.path(), &["toggle", "abc"]);
    assert!(!success);
    assert!(stderr.contains("invalid task id 'abc'"));
}

#[test]
fn test_toggle_twice() {
    let tmp = tempfile::TempDir::new().unwrap();
    let id = add(tmp.path(), "flip");
    let out = run_mt_ok(tmp.path(), &["toggle", &id]);
    assert!(out.contains("[x] flip"));
    assert_eq!(stored(tmp.path())[0]["completed"], true);
    assert!(run_mt_ok(tmp.path(), &["count"]).contains("0 tasks left"));

    run_mt_ok(tmp.path(), &["toggle", &id]);
    assert_eq!(stored(tmp.path())[0]["completed"], false);
}

#[test]
fn test_rm_keeps_order_of_rest() {
    let tmp = tempfile::TempDir::new().unwrap();
    add(tmp.path(), "a");
    let b = add(tmp.path(), "b");
    add(tmp.path(), "c");
    run_mt_ok(tmp.path(), &["rm", &b]);
    assert_eq!(stored_titles(tmp.path()), vec!["a", "c"]);
}

// ---------------------------------------------------------------------------
// Mv / clear / count
// ---------------------------------------------------------------------------

#[test]
fn test_mv_reorders() {
    let tmp = tempfile::TempDir::new().unwrap();
    for t in ["a", "b", "c", "d"] {
        add(tmp.path(), t);
    }
    run_mt_ok(tmp.path(), &["mv", "1", "3"]);
    assert_eq!(stored_titles(tmp.path()), vec!["b", "c", "a", "d"]);
}

#[test]
fn test_mv_clamps_destination() {
    let tmp = tempfile::TempDir::new().unwrap();
    for t in ["a", "b", "c"] {
        add(tmp.path(), t);
    }
    run_mt_ok(tmp.path(), &["mv", "1", "99"]);
    assert_eq!(stored_titles(tmp.path()), vec!["b", "c", "a"]);
}

#[test]
fn test_mv_out_of_range_source_is_ignored() {
    let tmp = tempfile::TempDir::new().unwrap();
    add(tmp.path(), "a");
    add(tmp.path(), "b");
    let (_, stderr, success) = run_mt(tmp.path(), &["mv", "5", "1"]);
    assert!(success);
    assert!(stderr.contains("no task at position 5"));
    assert_eq!(stored_titles(tmp.path()), vec!["a", "b"]);
}

#[test]
fn test_mv_rejects_zero() {
    let tmp = tempfile::TempDir::new().unwrap();
    add(tmp.path(), "a");
    let (_, _, success) = run_mt(tmp.path(), &["mv", "0", "1"]);
    assert!(!success);
}

#[test]
fn test_clear_requires_yes() {
    let tmp = tempfile::TempDir::new().unwrap();
    add(tmp.path(), "a");
    let (_, stderr, success) = run_mt(tmp.path(), &["clear"]);
    assert!(!success);
    assert!(stderr.contains("--yes"));
    assert_eq!(stored_titles(tmp.path()), vec!["a"]);

    run_mt_ok(tmp.path(), &["clear", "--yes"]);
    assert_eq!(stored(tmp.path()), serde_json::json!([]));
}

#[test]
fn test_count_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let a = add(tmp.path(), "a");
    add(tmp.path(), "b");
    add(tmp.path(), "c");
    run_mt_ok(tmp.path(), &["toggle", &a]);
    let out = run_mt_ok(tmp.path(), &["count", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({"remaining": 2, "completed": 1, "total": 3})
    );
}

// ---------------------------------------------------------------------------
// Storage and config edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_corrupt_storage_reads_as_empty() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("tasks.json"), "{{ not json").unwrap();
    let out = run_mt_ok(tmp.path(), &["list"]);
    assert!(out.contains("No tasks"));

    // Next write replaces the bad value
    add(tmp.path(), "fresh");
    assert_eq!(stored_titles(tmp.path()), vec!["fresh"]);
}

#[test]
fn test_config_storage_key() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[storage]\nkey = \"work\"\n",
    )
    .unwrap();
    add(tmp.path(), "at work");
    assert!(tmp.path().join("work.json").exists());
    assert!(!tmp.path().join("tasks.json").exists());
}

#[test]
fn test_malformed_config_is_an_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[storage\n").unwrap();
    let (_, stderr, success) = run_mt(tmp.path(), &["list"]);
    assert!(!success);
    assert!(stderr.starts_with("error:"));
    assert!(stderr.contains("config.toml"));
}

#[test]
fn test_bad_storage_key_fails_before_listing() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[storage]\nkey = \"my tasks\"\n",
    )
    .unwrap();
    let (stdout, stderr, success) = run_mt(tmp.path(), &["list"]);
    assert!(!success);
    assert!(!stdout.contains("No tasks"));
    assert!(stderr.contains("storage key"));
}

#[test]
fn test_buy_milk_scenario() {
    let tmp = tempfile::TempDir::new().unwrap();
    let id = add(tmp.path(), "Buy milk");
    run_mt_ok(tmp.path(), &["toggle", &id]);
    assert!(run_mt_ok(tmp.path(), &["count"]).contains("0 tasks left"));
    run_mt_ok(tmp.path(), &["edit", &id, "Buy oat milk"]);
    let value = stored(tmp.path());
    assert_eq!(value[0]["title"], "Buy oat milk");
    assert_eq!(value[0]["completed"], true);
    run_mt_ok(tmp.path(), &["rm", &id]);
    assert_eq!(stored(tmp.path()), serde_json::json!([]));
}
