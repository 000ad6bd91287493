//! `rhdh-local status [SERVICE]`

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::lifecycle::parse_service;
use crate::application::{HubLifecycle, HubServiceOps};
use crate::commands::with_spinner;

/// Show the whole hub, or one service when `service` is given.
///
/// # Errors
///
/// Returns an error for unknown services or, for a single service, when `ps`
/// fails.
pub async fn run(app: &AppContext, service: Option<&str>) -> Result<ExitCode> {
    let hub = app.hub()?;
    match service {
        Some(name) => {
            let parsed = parse_service(name)?;
            let status =
                with_spinner(app, "Checking service...", hub.get_service_status(name)).await?;
            app.renderer().render_service_status(parsed, &status)?;
        }
        None => {
            let status = with_spinner(app, "Checking status...", hub.get_status()).await?;
            app.renderer().render_status(&status)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
