//! `rhdh-local open` and `rhdh-local terminal`.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::HubUtilities;

/// Open the hub in the browser.
///
/// # Errors
///
/// Returns an error if no browser opener can be spawned.
pub async fn browser(app: &AppContext) -> Result<ExitCode> {
    let hub = app.hub()?;
    hub.open_rhdh_in_browser().await?;
    app.renderer()
        .render_done("open", &format!("Opened {}", hub.config().rhdh_url), None)?;
    Ok(ExitCode::SUCCESS)
}

/// Open a terminal in the checkout.
///
/// # Errors
///
/// Returns an error if the checkout is missing or no terminal can be spawned.
pub async fn terminal(app: &AppContext) -> Result<ExitCode> {
    let hub = app.hub()?;
    hub.open_repository_in_terminal().await?;
    app.renderer().render_done(
        "terminal",
        &format!("Opened a terminal in {}", hub.repo_path().display()),
        Some(hub.repo_path()),
    )?;
    Ok(ExitCode::SUCCESS)
}
