use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn mood_viewer(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("mood-viewer");
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env("TZ", "UTC")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_renders_local_state_file() {
    let temp_dir = TempDir::new().unwrap();
    let state_file = temp_dir.path().join("state.json");
    fs::write(
        &state_file,
        r#"{"mood":"calm","caption":"","imageUrl":"http://x/img.png","updatedAt":"2024-01-01T00:00:00Z"}"#,
    )
    .unwrap();

    mood_viewer(temp_dir.path())
        .args(["--state-url", state_file.to_str().unwrap(), "--polls", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# calm"))
        .stdout(predicate::str::contains("Updated Mon, Jan 1, 12:00 AM"))
        .stdout(predicate::str::contains("http://x/img.png"));
}

#[test]
fn test_missing_state_renders_error() {
    let temp_dir = TempDir::new().unwrap();

    mood_viewer(temp_dir.path())
        .args(["--state-url", "missing.json", "--polls", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood wall temporarily unavailable"))
        .stdout(predicate::str::contains("Error loading state (HTTP 404)"));
}

#[test]
fn test_polls_http_state_until_limit() {
    let temp_dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let failing = server
        .mock("GET", "/state.json")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .expect(2)
        .create();

    mood_viewer(temp_dir.path())
        .args([
            "--state-url",
            &format!("{}/state.json", server.url()),
            "--interval",
            "1",
            "--polls",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading state (HTTP 500)"));

    failing.assert();
}

#[test]
fn test_default_config_reads_docs_state() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("docs")).unwrap();
    fs::write(
        temp_dir.path().join("docs/state.json"),
        r#"{"mood":"stormy coast","caption":"Waves all day"}"#,
    )
    .unwrap();

    mood_viewer(temp_dir.path())
        .args(["--polls", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# stormy coast"))
        .stdout(predicate::str::contains("Waves all day"))
        .stdout(predicate::str::contains("No timestamp available"));
}

#[test]
fn test_zero_polls_rejected() {
    let temp_dir = TempDir::new().unwrap();

    mood_viewer(temp_dir.path())
        .args(["--state-url", "missing.json", "--polls", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--polls"))
        .stdout(predicate::str::is_empty());
}
