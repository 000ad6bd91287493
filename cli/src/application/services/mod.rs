//! Application services: use-case orchestration.
//!
//! Each service module implements one group of hub operations by composing
//! domain logic with port trait calls. Services import only from
//! `crate::domain` and `crate::application::ports`, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

use crate::application::ports::HubFs;
use crate::domain::HubError;
use crate::domain::compose::COMPOSE_FILES;

pub mod config_service;
pub mod configuration;
pub mod hub_services;
pub mod installation;
pub mod lifecycle;
pub mod repository;
pub mod utilities;

/// Turn a non-zero exit into [`HubError::CommandFailed`].
///
/// # Errors
///
/// Returns an error if the process exited unsuccessfully.
pub fn ensure_success(output: Output, program: &str, args: &[&str]) -> Result<Output> {
    if output.status.success() {
        Ok(output)
    } else {
        Err(HubError::command_failed(program, args, &output.stderr).into())
    }
}

/// First compose file present at the repository root.
pub fn find_compose_file(fs: &impl HubFs, repo: &Path) -> Option<&'static str> {
    COMPOSE_FILES
        .iter()
        .copied()
        .find(|name| fs.exists(&repo.join(name)))
}

/// Whether `repo` looks like an rhdh-local checkout.
pub fn is_installed(fs: &impl HubFs, repo: &Path) -> bool {
    fs.exists(repo) && find_compose_file(fs, repo).is_some()
}

/// Fail with [`HubError::NotInstalled`] unless `repo` is a checkout.
///
/// # Errors
///
/// Returns an error if the repository is missing or has no compose file.
pub fn require_installed(fs: &impl HubFs, repo: &Path) -> Result<()> {
    if is_installed(fs, repo) {
        Ok(())
    } else {
        Err(HubError::NotInstalled {
            path: repo.to_path_buf(),
        }
        .into())
    }
}
