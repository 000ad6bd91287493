//! Domain validators for rhdh-local tool settings.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::PathBuf;

use anyhow::Result;
use rhdh_common::HubConfig;

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["repo.path", "repo.url", "rhdh.url"];

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a settings key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a settings value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let reason = match key {
        "repo.path" if value.trim().is_empty() => Some("Path must not be empty."),
        "repo.url" if !is_git_url(value) => {
            Some("Expected an https://, http://, ssh://, file:// or git@host:path URL.")
        }
        "rhdh.url" if !is_http_url(value) => Some("Expected an http:// or https:// URL."),
        _ => None,
    };
    if let Some(reason) = reason {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Apply a validated key/value pair to `config`.
///
/// # Errors
///
/// Returns an error if the key or value fails validation.
pub fn apply_config_value(config: &mut HubConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;
    match key {
        "repo.path" => config.repo_path = PathBuf::from(value.trim()),
        "repo.url" => config.repo_url = value.trim().to_string(),
        "rhdh.url" => config.rhdh_url = value.trim().trim_end_matches('/').to_string(),
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
}

fn is_git_url(value: &str) -> bool {
    let value = value.trim();
    if ["ssh://", "file://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
    {
        return true;
    }
    if is_http_url(value) {
        return true;
    }
    // scp-like syntax: git@github.com:org/repo.git
    value
        .split_once(':')
        .is_some_and(|(host, path)| host.contains('@') && !path.is_empty())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
