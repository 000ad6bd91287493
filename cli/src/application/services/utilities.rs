//! Application service: desktop helpers, defaults and log export.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rhdh_common::{HubConfig, ServiceName};

use crate::application::ports::{ComposeClient, DesktopLauncher, HubFs, ProgressReporter};
use crate::application::services::hub_services::get_logs;
use crate::application::services::require_installed;
use crate::domain::logs::export_section_header;

/// Open the hub UI in the default browser.
///
/// # Errors
///
/// Returns an error if the browser opener cannot be spawned.
pub fn open_rhdh_in_browser(launcher: &impl DesktopLauncher, url: &str) -> Result<()> {
    tracing::debug!(url, "opening browser");
    launcher.open_url(url)
}

/// Open a terminal in the checkout.
///
/// # Errors
///
/// Returns an error if the checkout is missing or no terminal can be spawned.
pub fn open_repository_in_terminal(
    launcher: &impl DesktopLauncher,
    fs: &impl HubFs,
    repo: &Path,
) -> Result<()> {
    require_installed(fs, repo)?;
    tracing::debug!(repo = %repo.display(), "opening terminal");
    launcher.open_terminal(repo)
}

/// Built-in settings, ignoring anything saved on disk.
#[must_use]
pub fn get_default_configuration() -> HubConfig {
    HubConfig::default()
}

/// File name for a log bundle captured at `now`.
#[must_use]
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("rhdh-local-logs-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Write the logs of every hub service into one file under `exports_dir`.
///
/// A service whose logs cannot be read gets its error message in place of
/// its logs; the export itself carries on.
///
/// # Errors
///
/// Returns an error if the checkout is missing or the bundle cannot be
/// written.
pub async fn export_logs(
    compose: &impl ComposeClient,
    fs: &impl HubFs,
    reporter: &impl ProgressReporter,
    repo: &Path,
    exports_dir: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf> {
    require_installed(fs, repo)?;
    let mut bundle = format!("# rhdh-local logs exported {}\n\n", now.to_rfc3339());

    for service in ServiceName::ALL {
        reporter.step(&format!("collecting {service} logs..."));
        bundle.push_str(&export_section_header(service.key()));
        match get_logs(compose, fs, repo, service.key(), None).await {
            Ok(logs) => {
                bundle.push_str(&logs.logs);
                if !logs.logs.ends_with('\n') {
                    bundle.push('\n');
                }
            }
            Err(e) => {
                tracing::warn!(service = %service, error = %e, "could not collect logs");
                reporter.warn(&format!("could not collect {service} logs"));
                bundle.push_str(&format!("[failed to collect logs: {e:#}]\n"));
            }
        }
        bundle.push('\n');
    }

    let path = exports_dir.join(export_file_name(now));
    fs.write_atomic(&path, &bundle)
        .with_context(|| format!("writing {}", path.display()))?;
    reporter.success(&format!("logs exported to {}", path.display()));
    Ok(path)
}
