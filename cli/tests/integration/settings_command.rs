//! `rhdh-local settings` against a temporary settings file.

#![allow(clippy::expect_used)]

use predicates::prelude::*;
use tempfile::TempDir;

use crate::cli_tests::rhdh_local;

fn tmp() -> TempDir {
    TempDir::new().expect("tempdir")
}

#[test]
fn show_lists_keys_and_file() {
    let dir = tmp();
    rhdh_local(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repo.url:"))
        .stdout(predicate::str::contains("rhdh.url:"))
        .stdout(predicate::str::contains("config.yaml"));
}

#[test]
fn show_json_has_settings_fields() {
    let dir = tmp();
    let out = rhdh_local(&dir)
        .args(["settings", "show", "--json"])
        .output()
        .expect("run");
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(
        json["settings"]["repo_url"],
        "https://github.com/redhat-developer/rhdh-local.git"
    );
}

#[test]
fn set_persists_to_settings_file() {
    let dir = tmp();
    rhdh_local(&dir)
        .args(["settings", "set", "rhdh.url", "http://localhost:8080/"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(dir.path().join("config.yaml")).expect("saved");
    assert!(saved.contains("localhost:8080"), "{saved}");
    assert!(!saved.contains("8080/"), "{saved}");
}

#[test]
fn set_unknown_key_fails() {
    let dir = tmp();
    rhdh_local(&dir)
        .args(["settings", "set", "repo.branch", "main"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting: repo.branch"));
}

#[test]
fn set_invalid_value_json_error_code() {
    let dir = tmp();
    let out = rhdh_local(&dir)
        .args(["settings", "set", "rhdh.url", "localhost", "--json"])
        .output()
        .expect("run");
    assert_eq!(out.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(json["code"], "invalid_setting");
}

#[test]
fn defaults_ignore_saved_settings() {
    let dir = tmp();
    rhdh_local(&dir)
        .args(["settings", "defaults"])
        .assert()
        .success()
        .stdout(predicate::str::contains("~/rhdh-local"));
}
