//! Unit tests for the YAML settings store.

#![allow(clippy::expect_used, unsafe_code)]

use std::path::PathBuf;

use rhdh_common::HubConfig;
use rhdh_local::application::ConfigStore;
use rhdh_local::infra::config::{CONFIG_ENV, YamlConfigStore};
use serial_test::serial;

/// Point the store at a file inside `dir` for the duration of a test.
struct ConfigEnvGuard;

impl ConfigEnvGuard {
    fn set(path: &std::path::Path) -> Self {
        // SAFETY: tests touching CONFIG_ENV are serialized with #[serial].
        unsafe { std::env::set_var(CONFIG_ENV, path) };
        Self
    }
}

impl Drop for ConfigEnvGuard {
    fn drop(&mut self) {
        // SAFETY: see ConfigEnvGuard::set.
        unsafe { std::env::remove_var(CONFIG_ENV) };
    }
}

#[test]
#[serial]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    let _guard = ConfigEnvGuard::set(&path);

    let store = YamlConfigStore;
    assert_eq!(store.path().expect("path"), path);
    assert_eq!(store.load().expect("load"), HubConfig::default());
}

#[test]
#[serial]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.yaml");
    let _guard = ConfigEnvGuard::set(&path);

    let config = HubConfig {
        repo_path: PathBuf::from("/srv/rhdh-local"),
        ..HubConfig::default()
    };
    YamlConfigStore.save(&config).expect("save");
    assert_eq!(YamlConfigStore.load().expect("load"), config);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
#[serial]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "rhdh_url: http://localhost:8080\n").expect("write");
    let _guard = ConfigEnvGuard::set(&path);

    let config = YamlConfigStore.load().expect("load");
    assert_eq!(config.rhdh_url, "http://localhost:8080");
    assert_eq!(config.repo_url, HubConfig::default().repo_url);
}

#[test]
#[serial]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "rhdh_url: [oops\n").expect("write");
    let _guard = ConfigEnvGuard::set(&path);

    let err = YamlConfigStore.load().expect_err("malformed");
    assert!(err.to_string().contains("invalid settings"), "{err}");
}
