//! End-to-end tests for the two terminal actions

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_script_mode_writes_report_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("profile_report.html");

    Command::cargo_bin("rhoscope")
        .unwrap()
        .args([
            "--mode",
            "script",
            "--no-open",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(!html.is_empty(), "the report file must not be empty");
    assert!(
        html.to_lowercase().starts_with("<!doctype html>") || html.starts_with("<html"),
        "the report must be a valid HTML document"
    );
}

#[test]
fn test_script_mode_overwrites_previous_report() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("profile_report.html");
    std::fs::write(&output, "stale content from a previous run").unwrap();

    Command::cargo_bin("rhoscope")
        .unwrap()
        .args([
            "--mode",
            "script",
            "--no-open",
            "--minimal",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(!html.contains("stale content"), "each run overwrites the file");
    assert!(html.to_lowercase().starts_with("<!doctype html>"));
}

#[test]
fn test_dashboard_mode_emits_host_page() {
    let output = Command::cargo_bin("rhoscope")
        .unwrap()
        .args(["--mode", "dashboard", "--title", "Session Profile"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with("<!doctype html>"));
    assert!(
        stdout.contains("data:text/html;base64,"),
        "the report must be embedded by data-URI reference"
    );
    assert!(stdout.contains("height=\"3000\""));
    assert!(stdout.contains("scrolling=\"yes\""));
    assert!(stdout.contains("<title>Session Profile</title>"));
    assert!(
        !stdout.contains("reportTitle"),
        "the report document itself must not leak inline into stdout"
    );
}

#[test]
fn test_auto_mode_probes_environment() {
    let output = Command::cargo_bin("rhoscope")
        .unwrap()
        .env("RHOSCOPE_DASHBOARD", "1")
        .args(["--mode", "auto"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("data:text/html;base64,"),
        "an advertised session must select dashboard mode"
    );
}
