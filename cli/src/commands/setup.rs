//! `rhdh-local setup`: create `.env` from the sample.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::HubInstallation;

/// Run the setup command.
///
/// # Errors
///
/// Returns an error if the checkout is missing or has no env sample.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let hub = app.hub()?;
    hub.setup_environment().await?;
    let env = hub.repo_path().join(".env");
    app.renderer()
        .render_done("setup", &format!("Environment ready ({})", env.display()), Some(&env))?;
    Ok(ExitCode::SUCCESS)
}
