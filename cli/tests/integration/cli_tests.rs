//! CLI structure, argument parsing and error reporting.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A binary invocation whose settings point at an empty checkout directory.
pub fn rhdh_local(dir: &TempDir) -> Command {
    let settings = dir.path().join("config.yaml");
    let repo = dir.path().join("rhdh-local");
    std::fs::write(&settings, format!("repo_path: {}\n", repo.display()))
        .expect("write settings");
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rhdh-local"));
    cmd.env("NO_COLOR", "1")
        .env("RHDH_LOCAL_CONFIG", &settings)
        .env_remove("RUST_LOG");
    cmd
}

fn tmp() -> TempDir {
    TempDir::new().expect("tempdir")
}

// --- Help and version ---

#[test]
fn no_args_shows_help_and_exits_two() {
    let dir = tmp();
    rhdh_local(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Manage a local Red Hat Developer Hub"));
}

#[test]
fn no_color_env_still_shows_help_without_args() {
    let dir = tmp();
    rhdh_local(&dir)
        .env("NO_COLOR", "true")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage: rhdh-local"))
        .stderr(predicate::str::contains("requires a subcommand").not());
}

#[test]
fn no_color_flag_is_accepted_with_a_command() {
    let dir = tmp();
    rhdh_local(&dir)
        .args(["--no-color", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rhdh-local "))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn help_lists_commands() {
    let dir = tmp();
    rhdh_local(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("install-plugins"))
        .stdout(predicate::str::contains("export-logs"))
        .stdout(predicate::str::contains("settings"));
}

#[test]
fn version_flag_and_command_agree() {
    let dir = tmp();
    let version = env!("CARGO_PKG_VERSION");
    rhdh_local(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(version));
    rhdh_local(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("rhdh-local {version}")));
}

#[test]
fn version_json_is_valid() {
    let dir = tmp();
    let out = rhdh_local(&dir)
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let dir = tmp();
    rhdh_local(&dir).arg("frobnicate").assert().code(2);
}

// --- Status without a checkout ---

#[test]
fn status_without_checkout_warns_and_succeeds() {
    let dir = tmp();
    rhdh_local(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not installed"));
}

#[test]
fn status_json_without_checkout_has_three_stopped_services() {
    let dir = tmp();
    let out = rhdh_local(&dir)
        .args(["status", "--json"])
        .output()
        .expect("run");
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(json["is_installed"], false);
    assert_eq!(json["is_running"], false);
    for key in ["rhdh", "install-dynamic-plugins", "postgresql"] {
        assert_eq!(json["services"][key]["status"], "stopped", "{key}");
    }
}

// --- Errors ---

#[test]
fn restart_unknown_service_fails_with_message() {
    let dir = tmp();
    rhdh_local(&dir)
        .args(["restart", "redis"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown service 'redis'"));
}

#[test]
fn logs_unknown_service_json_error_has_code() {
    let dir = tmp();
    let out = rhdh_local(&dir)
        .args(["logs", "keycloak", "--json"])
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(json["code"], "unknown_service");
}

#[test]
fn start_without_checkout_is_not_installed() {
    let dir = tmp();
    rhdh_local(&dir)
        .arg("start")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("rhdh-local clone"));
}

#[test]
fn doctor_without_checkout_reports_issues() {
    let dir = tmp();
    let out = rhdh_local(&dir)
        .args(["doctor", "--json"])
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(json["installed"], false);
    let issues = json["issues"].as_array().expect("issues array");
    assert!(issues.iter().any(|i| i.as_str().is_some_and(|s| s.contains("Repository not found"))));
}
