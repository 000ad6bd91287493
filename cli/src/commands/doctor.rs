//! `rhdh-local doctor`: check tools and the checkout.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::HubInstallation;
use crate::commands::with_spinner;

/// Run the doctor command. Exits non-zero when any issue is found.
///
/// # Errors
///
/// Returns an error if settings cannot be loaded.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let hub = app.hub()?;
    let check = with_spinner(app, "Checking installation...", hub.check_installation()).await?;
    app.renderer().render_installation(&check, app.verbose)?;
    Ok(if check.issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
