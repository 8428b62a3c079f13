//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a throwaway HOME so
//! they never touch the real data directory.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &std::path::Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "mindwell-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("MINDWELL_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_assess_list() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["assess", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("mood-check"));
    assert!(stdout.contains("type-finder"));
}

#[test]
fn test_assess_show() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["assess", "show", "mood-check"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("mood-check"));
}

#[test]
fn test_assess_show_unknown_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["assess", "show", "nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown assessment"));
}

#[test]
fn test_assess_score_and_results_round_trip() {
    let home = tempfile::tempdir().unwrap();

    // Every mood-check question answered with 1: six direct items plus
    // two reversed items scoring 2 each, 10 total.
    let answers: serde_json::Value = (1..=8)
        .map(|i| (format!("mc{i}"), serde_json::json!(1)))
        .collect::<serde_json::Map<_, _>>()
        .into();
    let answers_path = home.path().join("answers.json");
    std::fs::write(&answers_path, answers.to_string()).unwrap();

    let (stdout, stderr, code) = run_cli(
        home.path(),
        &[
            "assess",
            "score",
            "mood-check",
            "--answers",
            answers_path.to_str().unwrap(),
            "--save",
        ],
    );
    assert_eq!(code, 0, "score failed: {stderr}");
    assert!(stdout.contains("saved:"));

    let (stdout, _, code) = run_cli(home.path(), &["results", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("mood-check"));

    let (_, _, code) = run_cli(home.path(), &["results", "clear"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(home.path(), &["results", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("no results"));
}

#[test]
fn test_assess_score_incomplete_fails() {
    let home = tempfile::tempdir().unwrap();
    let answers_path = home.path().join("answers.json");
    std::fs::write(&answers_path, r#"{"mc1": 1}"#).unwrap();

    let (_, stderr, code) = run_cli(
        home.path(),
        &[
            "assess",
            "score",
            "mood-check",
            "--answers",
            answers_path.to_str().unwrap(),
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("Incomplete"));
}

#[test]
fn test_sync_status_starts_empty() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["sync", "status"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("pending: 0"));
    assert!(stdout.contains("last sync: never"));
}

#[test]
fn test_assess_score_json_output() {
    let home = tempfile::tempdir().unwrap();
    let answers: serde_json::Value = (1..=8)
        .map(|i| (format!("mc{i}"), serde_json::json!(0)))
        .collect::<serde_json::Map<_, _>>()
        .into();
    let answers_path = home.path().join("answers.json");
    std::fs::write(&answers_path, answers.to_string()).unwrap();

    let (stdout, _, code) = run_cli(
        home.path(),
        &[
            "assess",
            "score",
            "mood-check",
            "--answers",
            answers_path.to_str().unwrap(),
            "--json",
        ],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["type"], "standard");
}
