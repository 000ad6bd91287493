//! `rhdh-local logs` and `rhdh-local export-logs`.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::{HubServiceOps, HubUtilities};

/// Arguments for the logs command.
#[derive(Args)]
pub struct LogsArgs {
    /// Service: rhdh, install-dynamic-plugins or postgresql
    pub service: String,

    /// Show only the last N lines
    #[arg(short = 'n', long = "lines")]
    pub lines: Option<usize>,
}

/// Print a service's logs.
///
/// # Errors
///
/// Returns an error for unknown services or a failing `logs` command.
pub async fn run(app: &AppContext, args: &LogsArgs) -> Result<ExitCode> {
    let hub = app.hub()?;
    let logs = hub.get_logs(&args.service, args.lines).await?;
    app.renderer().render_logs(&logs)?;
    Ok(ExitCode::SUCCESS)
}

/// Bundle every service's logs into one file.
///
/// # Errors
///
/// Returns an error if the checkout is missing or the file cannot be written.
pub async fn export(app: &AppContext) -> Result<ExitCode> {
    let hub = app.hub()?;
    let path = hub.export_logs().await?;
    app.renderer().render_done(
        "export-logs",
        &format!("Logs written to {}", path.display()),
        Some(&path),
    )?;
    Ok(ExitCode::SUCCESS)
}
