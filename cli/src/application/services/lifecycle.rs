//! Application service: hub status and start/stop/restart.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use rhdh_common::{GitStatus, HubServices, HubStatus, ServiceName, ServiceState};

use crate::application::ports::{ComposeClient, GitClient, HubFs, ProgressReporter};
use crate::application::services::{
    ensure_success, installation::setup_environment, is_installed, require_installed,
};
use crate::domain::HubError;
use crate::domain::compose::parse_ps_output;
use crate::domain::git::parse_porcelain_v2;

/// Query `ps` and map containers onto the three hub services.
///
/// # Errors
///
/// Returns an error if `ps` cannot run, exits non-zero, or prints output that
/// is not JSON.
pub async fn service_statuses(compose: &impl ComposeClient, repo: &Path) -> Result<HubServices> {
    let output = compose.ps(repo).await?;
    let output = ensure_success(output, "podman-compose", &["ps", "--format", "json"])?;
    parse_ps_output(&String::from_utf8_lossy(&output.stdout), Utc::now().timestamp())
}

/// Build a fresh status snapshot.
///
/// Infallible: a failing `ps` yields `unknown` for every service and a
/// failing git query leaves branch and commit empty.
pub async fn get_status(
    git: &impl GitClient,
    compose: &impl ComposeClient,
    fs: &impl HubFs,
    repo: &Path,
    rhdh_url: &str,
) -> HubStatus {
    let installed = is_installed(fs, repo);
    if !installed {
        return HubStatus {
            is_running: false,
            is_installed: false,
            services: HubServices::all(ServiceState::Stopped),
            url: None,
            repo_path: None,
            last_updated: Utc::now(),
            git_branch: None,
            git_commit: None,
        };
    }

    let (services, git_status) = tokio::join!(service_statuses(compose, repo), local_git_status(git, repo));
    let services = services.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not query service status");
        HubServices::all(ServiceState::Unknown)
    });
    let is_running = services.rhdh.status == ServiceState::Running;

    HubStatus {
        is_running,
        is_installed: true,
        services,
        url: is_running.then(|| rhdh_url.to_string()),
        repo_path: Some(repo.to_path_buf()),
        last_updated: Utc::now(),
        git_branch: git_status.as_ref().map(|s| s.branch.clone()),
        git_commit: git_status.map(|s| s.commit),
    }
}

/// Branch and commit without touching the network.
async fn local_git_status(git: &impl GitClient, repo: &Path) -> Option<GitStatus> {
    let output = git.status(repo).await.ok()?;
    if !output.status.success() {
        return None;
    }
    parse_porcelain_v2(&String::from_utf8_lossy(&output.stdout)).ok()
}

/// Ensure `.env` exists, then bring the stack up.
///
/// # Errors
///
/// Returns an error if the checkout is missing, `.env` cannot be created, or
/// `up -d` fails.
pub async fn start(
    compose: &impl ComposeClient,
    fs: &impl HubFs,
    reporter: &impl ProgressReporter,
    repo: &Path,
) -> Result<()> {
    setup_environment(fs, reporter, repo)?;
    reporter.step("starting services...");
    let output = compose.up(repo).await?;
    ensure_success(output, "podman-compose", &["up", "-d"])?;
    tracing::info!(repo = %repo.display(), "hub started");
    reporter.success("services started");
    Ok(())
}

/// Bring the stack down.
///
/// # Errors
///
/// Returns an error if the checkout is missing or `down` fails.
pub async fn stop(
    compose: &impl ComposeClient,
    fs: &impl HubFs,
    reporter: &impl ProgressReporter,
    repo: &Path,
) -> Result<()> {
    require_installed(fs, repo)?;
    reporter.step("stopping services...");
    let output = compose.down(repo).await?;
    ensure_success(output, "podman-compose", &["down"])?;
    tracing::info!(repo = %repo.display(), "hub stopped");
    reporter.success("services stopped");
    Ok(())
}

/// Stop, then start.
///
/// # Errors
///
/// Returns the first error from either half.
pub async fn restart(
    compose: &impl ComposeClient,
    fs: &impl HubFs,
    reporter: &impl ProgressReporter,
    repo: &Path,
) -> Result<()> {
    stop(compose, fs, reporter, repo).await?;
    start(compose, fs, reporter, repo).await
}

/// Restart a single service by name.
///
/// # Errors
///
/// Returns [`HubError::UnknownService`] before spawning anything when `name`
/// is not a hub service, or an error if `restart` fails.
pub async fn restart_service(
    compose: &impl ComposeClient,
    fs: &impl HubFs,
    reporter: &impl ProgressReporter,
    repo: &Path,
    name: &str,
) -> Result<ServiceName> {
    let service = parse_service(name)?;
    require_installed(fs, repo)?;
    reporter.step(&format!("restarting {service}..."));
    let compose_name = service.compose_service();
    let output = compose.restart(repo, compose_name).await?;
    ensure_success(output, "podman-compose", &["restart", compose_name])?;
    reporter.success(&format!("{service} restarted"));
    Ok(service)
}

/// Parse a user-supplied service name.
///
/// # Errors
///
/// Returns [`HubError::UnknownService`] for anything but the three hub
/// services (or the `db` alias).
pub fn parse_service(name: &str) -> Result<ServiceName> {
    name.parse::<ServiceName>()
        .map_err(|_| HubError::UnknownService(name.to_string()).into())
}
