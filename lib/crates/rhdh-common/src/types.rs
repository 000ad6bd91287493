use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Observed state of a single compose service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Running,
    Stopped,
    Error,
    #[default]
    Unknown,
}

impl ServiceState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Error => "error",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of one compose service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceStatus {
    pub status: ServiceState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    /// Human-readable uptime, e.g. "2h 5m". Only set while running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
}

impl ServiceStatus {
    #[must_use]
    pub fn with_state(status: ServiceState) -> Self {
        Self {
            status,
            container_id: None,
            uptime: None,
        }
    }
}

/// Returned when a service name is not one of the three hub services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown service '{0}' (expected one of: rhdh, install-dynamic-plugins, postgresql)")]
pub struct UnknownServiceError(pub String);

/// The fixed set of services that make up a local hub instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceName {
    #[serde(rename = "rhdh")]
    Rhdh,
    #[serde(rename = "install-dynamic-plugins")]
    InstallDynamicPlugins,
    #[serde(rename = "postgresql")]
    Postgresql,
}

impl ServiceName {
    pub const ALL: [ServiceName; 3] = [
        ServiceName::Rhdh,
        ServiceName::InstallDynamicPlugins,
        ServiceName::Postgresql,
    ];

    /// Key used in status records and on the command line.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Rhdh => "rhdh",
            Self::InstallDynamicPlugins => "install-dynamic-plugins",
            Self::Postgresql => "postgresql",
        }
    }

    /// Service name as declared in the compose file.
    #[must_use]
    pub fn compose_service(self) -> &'static str {
        match self {
            Self::Rhdh => "rhdh",
            Self::InstallDynamicPlugins => "install-dynamic-plugins",
            Self::Postgresql => "db",
        }
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ServiceName {
    type Err = UnknownServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rhdh" => Ok(Self::Rhdh),
            "install-dynamic-plugins" => Ok(Self::InstallDynamicPlugins),
            "postgresql" | "db" => Ok(Self::Postgresql),
            other => Err(UnknownServiceError(other.to_string())),
        }
    }
}

/// Per-service statuses. One field per service so a status record always
/// carries exactly the three keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HubServices {
    pub rhdh: ServiceStatus,
    #[serde(rename = "install-dynamic-plugins")]
    pub install_dynamic_plugins: ServiceStatus,
    pub postgresql: ServiceStatus,
}

impl HubServices {
    /// All three services in the given state.
    #[must_use]
    pub fn all(status: ServiceState) -> Self {
        Self {
            rhdh: ServiceStatus::with_state(status),
            install_dynamic_plugins: ServiceStatus::with_state(status),
            postgresql: ServiceStatus::with_state(status),
        }
    }

    #[must_use]
    pub fn get(&self, name: ServiceName) -> &ServiceStatus {
        match name {
            ServiceName::Rhdh => &self.rhdh,
            ServiceName::InstallDynamicPlugins => &self.install_dynamic_plugins,
            ServiceName::Postgresql => &self.postgresql,
        }
    }

    pub fn get_mut(&mut self, name: ServiceName) -> &mut ServiceStatus {
        match name {
            ServiceName::Rhdh => &mut self.rhdh,
            ServiceName::InstallDynamicPlugins => &mut self.install_dynamic_plugins,
            ServiceName::Postgresql => &mut self.postgresql,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ServiceName, &ServiceStatus)> {
        ServiceName::ALL.into_iter().map(|name| (name, self.get(name)))
    }
}

/// Snapshot of the local hub instance, built fresh on every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubStatus {
    pub is_running: bool,
    pub is_installed: bool,
    pub services: HubServices,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_path: Option<PathBuf>,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_commit: Option<String>,
}

/// Captured log output of one service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubLogs {
    pub service: String,
    pub logs: String,
    pub timestamp: DateTime<Utc>,
}

/// Result of probing the host for the repository and required tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationCheck {
    pub installed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub git_available: bool,
    pub podman_compose_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub podman_compose_version: Option<String>,
    pub issues: Vec<String>,
}

/// Returned when a configuration kind is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(
    "unknown configuration type '{0}' (expected one of: app-config, dynamic-plugins, env, users, components)"
)]
pub struct UnknownConfigurationTypeError(pub String);

/// The editable configuration files of a hub checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ConfigurationType {
    AppConfig,
    DynamicPlugins,
    Env,
    Users,
    Components,
}

impl ConfigurationType {
    pub const ALL: [ConfigurationType; 5] = [
        ConfigurationType::AppConfig,
        ConfigurationType::DynamicPlugins,
        ConfigurationType::Env,
        ConfigurationType::Users,
        ConfigurationType::Components,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AppConfig => "app-config",
            Self::DynamicPlugins => "dynamic-plugins",
            Self::Env => "env",
            Self::Users => "users",
            Self::Components => "components",
        }
    }
}

impl fmt::Display for ConfigurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigurationType {
    type Err = UnknownConfigurationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownConfigurationTypeError(s.to_string()))
    }
}

/// Contents of one configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationFile {
    #[serde(rename = "type")]
    pub kind: ConfigurationType,
    pub path: PathBuf,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Outcome of validating configuration content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Branch, commit, and sync state of the hub checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitStatus {
    pub branch: String,
    pub commit: String,
    pub is_dirty: bool,
    pub unpulled_commits: u32,
}
