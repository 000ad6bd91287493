//! JSON output helpers.
//!
//! Provides the error-object formatter used by all `--json` code paths when
//! a command fails, and the renderer that prints result records.

use std::path::Path;

use anyhow::{Context, Result};
use rhdh_common::{
    ConfigurationFile, ConfigurationType, GitStatus, HubConfig, HubLogs, HubStatus,
    InstallationCheck, ServiceName, ServiceStatus, ValidationReport,
};
use serde::Serialize;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Serialize `value` as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("JSON serialization failed")
}

/// Renders result records as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        println!("{}", to_pretty(value)?);
        Ok(())
    }

    pub fn render_status(&self, status: &HubStatus) -> Result<()> {
        Self::print(status)
    }

    pub fn render_service_status(&self, name: ServiceName, status: &ServiceStatus) -> Result<()> {
        Self::print(&serde_json::json!({ "service": name, "status": status }))
    }

    pub fn render_installation(&self, check: &InstallationCheck) -> Result<()> {
        Self::print(check)
    }

    pub fn render_git_status(&self, status: &GitStatus) -> Result<()> {
        Self::print(status)
    }

    pub fn render_validation(&self, kind: ConfigurationType, report: &ValidationReport) -> Result<()> {
        Self::print(&serde_json::json!({
            "type": kind,
            "valid": report.valid,
            "errors": report.errors,
        }))
    }

    pub fn render_configuration(&self, file: &ConfigurationFile) -> Result<()> {
        Self::print(file)
    }

    pub fn render_settings(&self, config: &HubConfig, path: &Path) -> Result<()> {
        Self::print(&serde_json::json!({
            "path": path,
            "settings": config,
        }))
    }

    pub fn render_logs(&self, logs: &HubLogs) -> Result<()> {
        Self::print(logs)
    }

    pub fn render_version(&self, version: &str) -> Result<()> {
        Self::print(&serde_json::json!({ "version": version }))
    }

    pub fn render_done(&self, action: &str, path: Option<&Path>) -> Result<()> {
        let mut obj = serde_json::json!({ "success": true, "action": action });
        if let Some(path) = path {
            obj["path"] = serde_json::json!(path);
        }
        Self::print(&obj)
    }
}
