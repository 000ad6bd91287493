//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Hub errors ────────────────────────────────────────────────────────────────

/// Errors related to the hub checkout and its services.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("rhdh-local is not installed at {}. Run 'rhdh-local clone' first.", .path.display())]
    NotInstalled { path: PathBuf },

    #[error("{} already exists and is not empty. Choose another path with --path.", .path.display())]
    AlreadyCloned { path: PathBuf },

    #[error("Unknown service '{0}'. Valid services: rhdh, install-dynamic-plugins, postgresql")]
    UnknownService(String),

    #[error("No env.sample or default.env found in {}; cannot create .env", .path.display())]
    MissingEnvSample { path: PathBuf },

    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

impl HubError {
    /// Build a `CommandFailed` from a program invocation and its captured stderr.
    #[must_use]
    pub fn command_failed(program: &str, args: &[&str], stderr: &[u8]) -> Self {
        let mut command = program.to_string();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        let stderr = String::from_utf8_lossy(stderr).trim().to_string();
        Self::CommandFailed {
            command,
            stderr: if stderr.is_empty() {
                "no error output".to_string()
            } else {
                stderr
            },
        }
    }

    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotInstalled { .. } => "not_installed",
            Self::AlreadyCloned { .. } => "already_cloned",
            Self::UnknownService(_) => "unknown_service",
            Self::MissingEnvSample { .. } => "missing_env_sample",
            Self::CommandFailed { .. } => "command_failed",
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to settings keys and configuration file content.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Unknown configuration type '{0}'. Valid types: app-config, dynamic-plugins, env, users, components")]
    UnknownType(String),

    #[error("{kind} configuration is invalid:\n  - {}", .errors.join("\n  - "))]
    Invalid { kind: String, errors: Vec<String> },
}

impl ConfigError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownKey { .. } => "unknown_setting",
            Self::InvalidValue { .. } => "invalid_setting",
            Self::UnknownType(_) => "unknown_config_type",
            Self::Invalid { .. } => "invalid_configuration",
        }
    }
}
