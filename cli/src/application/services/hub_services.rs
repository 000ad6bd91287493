//! Application service: per-service operations: plugin install, logs, status.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use rhdh_common::{HubLogs, ServiceName, ServiceStatus};

use crate::application::ports::{ComposeClient, HubFs, ProgressReporter};
use crate::application::services::lifecycle::{parse_service, service_statuses};
use crate::application::services::{ensure_success, require_installed};
use crate::domain::logs::{merge_streams, tail_lines};

/// Run the one-shot dynamic plugin installer container.
///
/// # Errors
///
/// Returns an error if the checkout is missing or the installer fails.
pub async fn install_plugins(
    compose: &impl ComposeClient,
    fs: &impl HubFs,
    reporter: &impl ProgressReporter,
    repo: &Path,
) -> Result<()> {
    require_installed(fs, repo)?;
    let service = ServiceName::InstallDynamicPlugins.compose_service();
    reporter.step("installing dynamic plugins...");
    let output = compose.run_once(repo, service).await?;
    ensure_success(output, "podman-compose", &["run", "--rm", service])?;
    reporter.success("dynamic plugins installed");
    Ok(())
}

/// Fetch logs for one service, keeping at most `lines` lines.
///
/// The line bound is applied locally as well, so it holds even when the
/// compose implementation ignores `--tail`.
///
/// # Errors
///
/// Returns an error for unknown services, a missing checkout, or a failing
/// `logs` command.
pub async fn get_logs(
    compose: &impl ComposeClient,
    fs: &impl HubFs,
    repo: &Path,
    service: &str,
    lines: Option<usize>,
) -> Result<HubLogs> {
    let name = parse_service(service)?;
    require_installed(fs, repo)?;
    let compose_name = name.compose_service();
    let output = compose.logs(repo, compose_name, lines).await?;
    let output = ensure_success(output, "podman-compose", &["logs", compose_name])?;
    let text = merge_streams(&output.stdout, &output.stderr);
    Ok(HubLogs {
        service: name.key().to_string(),
        logs: tail_lines(&text, lines),
        timestamp: Utc::now(),
    })
}

/// Status of a single service from a fresh `ps`.
///
/// # Errors
///
/// Returns an error for unknown services, a missing checkout, or a failing
/// `ps`.
pub async fn get_service_status(
    compose: &impl ComposeClient,
    fs: &impl HubFs,
    repo: &Path,
    service: &str,
) -> Result<ServiceStatus> {
    let name = parse_service(service)?;
    require_installed(fs, repo)?;
    let services = service_statuses(compose, repo).await?;
    Ok(services.get(name).clone())
}
