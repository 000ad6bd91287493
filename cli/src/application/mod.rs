//! Application layer: port trait definitions, use-case orchestration and
//! the hub API built from them.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod hub;
pub mod ports;
pub mod services;

pub use hub::{
    HubConfiguration, HubInstallation, HubLifecycle, HubPorts, HubRepository, HubServiceOps,
    HubUtilities, LocalHub, LocalHubApi,
};
pub use ports::{
    CommandRunner, ComposeClient, ConfigStore, DesktopLauncher, GitClient, HubFs,
    ProgressReporter, SilentReporter,
};
