//! `rhdh-local start|stop|restart [SERVICE]`

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::HubLifecycle;

/// Start the hub.
///
/// # Errors
///
/// Returns an error if `.env` cannot be prepared or `up -d` fails.
pub async fn start(app: &AppContext) -> Result<ExitCode> {
    let hub = app.hub()?;
    hub.start().await?;
    app.renderer().render_done(
        "start",
        &format!("Hub starting at {}", hub.config().rhdh_url),
        None,
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Stop the hub.
///
/// # Errors
///
/// Returns an error if `down` fails.
pub async fn stop(app: &AppContext) -> Result<ExitCode> {
    let hub = app.hub()?;
    hub.stop().await?;
    app.renderer().render_done("stop", "Hub stopped", None)?;
    Ok(ExitCode::SUCCESS)
}

/// Restart everything, or one service.
///
/// # Errors
///
/// Returns an error for unknown services or a failing compose command.
pub async fn restart(app: &AppContext, service: Option<&str>) -> Result<ExitCode> {
    let hub = app.hub()?;
    match service {
        Some(name) => {
            let restarted = hub.restart_service(name).await?;
            app.renderer()
                .render_done("restart", &format!("{restarted} restarted"), None)?;
        }
        None => {
            hub.restart().await?;
            app.renderer().render_done("restart", "Hub restarted", None)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
