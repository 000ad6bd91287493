//! `rhdh-local install-plugins`

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::HubServiceOps;

/// Run the dynamic plugin installer.
///
/// # Errors
///
/// Returns an error if the installer container fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let hub = app.hub()?;
    hub.install_plugins().await?;
    app.output
        .info("Restart the hub to load new plugins: rhdh-local restart rhdh");
    app.renderer()
        .render_done("install-plugins", "Dynamic plugins installed", None)?;
    Ok(ExitCode::SUCCESS)
}
