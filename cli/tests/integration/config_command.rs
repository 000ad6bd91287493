//! `rhdh-local config` against temporary files and checkouts.

#![allow(clippy::expect_used)]

use predicates::prelude::*;
use tempfile::TempDir;

use crate::cli_tests::rhdh_local;

fn tmp() -> TempDir {
    TempDir::new().expect("tempdir")
}

/// Lay out a minimal checkout at the path the settings point to.
fn make_checkout(dir: &TempDir) -> std::path::PathBuf {
    let repo = dir.path().join("rhdh-local");
    std::fs::create_dir_all(repo.join("configs/app-config")).expect("mkdir");
    std::fs::write(repo.join("compose.yaml"), "services: {}\n").expect("compose");
    std::fs::write(repo.join("env.sample"), "BASE_URL=http://localhost:7007\n").expect("sample");
    repo
}

#[test]
fn validate_file_accepts_good_env() {
    let dir = tmp();
    let file = dir.path().join("good.env");
    std::fs::write(&file, "# comment\nA=1\nexport B=two\n").expect("write");

    rhdh_local(&dir)
        .args(["config", "validate", "env", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("env configuration is valid"));
}

#[test]
fn validate_file_rejects_bad_yaml_with_exit_one() {
    let dir = tmp();
    let file = dir.path().join("app-config.yaml");
    std::fs::write(&file, "app: [unclosed\n").expect("write");

    rhdh_local(&dir)
        .args(["config", "validate", "app-config", "--file"])
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid YAML"));
}

#[test]
fn validate_json_lists_errors() {
    let dir = tmp();
    let file = dir.path().join("plugins.yaml");
    std::fs::write(&file, "plugins:\n  - disabled: yes-please\n").expect("write");

    let out = rhdh_local(&dir)
        .args(["config", "validate", "dynamic-plugins", "--json", "--file"])
        .arg(&file)
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(2));
}

#[test]
fn unknown_configuration_type_is_usage_error() {
    let dir = tmp();
    rhdh_local(&dir)
        .args(["config", "get", "secrets"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("app-config"));
}

#[test]
fn get_without_checkout_json_error() {
    let dir = tmp();
    let out = rhdh_local(&dir)
        .args(["config", "get", "env", "--json"])
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(json["code"], "not_installed");
}

#[test]
fn set_then_get_round_trips_through_checkout() {
    let dir = tmp();
    let repo = make_checkout(&dir);
    let source = dir.path().join("app-config.local.yaml");
    std::fs::write(&source, "app:\n  title: Integration Hub\n").expect("write");

    rhdh_local(&dir)
        .args(["config", "set", "app-config", "--file"])
        .arg(&source)
        .assert()
        .success();

    let on_disk = std::fs::read_to_string(repo.join("configs/app-config/app-config.local.yaml"))
        .expect("written");
    assert_eq!(on_disk, "app:\n  title: Integration Hub\n");

    rhdh_local(&dir)
        .args(["config", "get", "app-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integration Hub"));
}

#[test]
fn set_reads_stdin_and_rejects_invalid_content() {
    let dir = tmp();
    let repo = make_checkout(&dir);
    std::fs::write(repo.join(".env"), "KEEP=1\n").expect("env");

    rhdh_local(&dir)
        .args(["config", "set", "env"])
        .write_stdin("1BAD=2\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid variable name"));

    assert_eq!(
        std::fs::read_to_string(repo.join(".env")).expect("env"),
        "KEEP=1\n"
    );
}

#[test]
fn setup_creates_env_from_sample() {
    let dir = tmp();
    let repo = make_checkout(&dir);

    rhdh_local(&dir).arg("setup").assert().success();

    assert_eq!(
        std::fs::read_to_string(repo.join(".env")).expect(".env"),
        "BASE_URL=http://localhost:7007\n"
    );
}
