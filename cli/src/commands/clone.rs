//! `rhdh-local clone` and `rhdh-local update`.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::HubInstallation;

/// Arguments for the clone command.
#[derive(Args)]
pub struct CloneArgs {
    /// Clone into this directory instead of the configured `repo.path`
    #[arg(long)]
    pub path: Option<String>,
}

/// Clone the hub repository.
///
/// # Errors
///
/// Returns an error if the target is a non-empty directory or `git clone`
/// fails.
pub async fn run(app: &AppContext, args: &CloneArgs) -> Result<ExitCode> {
    let hub = app.hub()?;
    let target = args.path.as_deref().map(|p| app.expand_path(p)).transpose()?;
    let path = hub.clone_repository(target.as_deref()).await?;
    if target.is_some() && path != hub.repo_path() {
        app.output.info(&format!(
            "Point rhdh-local at it with: rhdh-local settings set repo.path {}",
            path.display()
        ));
    }
    app.renderer()
        .render_done("clone", &format!("Cloned into {}", path.display()), Some(&path))?;
    Ok(ExitCode::SUCCESS)
}

/// Fast-forward the checkout.
///
/// # Errors
///
/// Returns an error if the checkout is missing or the pull fails.
pub async fn update(app: &AppContext) -> Result<ExitCode> {
    let hub = app.hub()?;
    hub.update_repository().await?;
    app.renderer()
        .render_done("update", "Repository updated", Some(hub.repo_path()))?;
    Ok(ExitCode::SUCCESS)
}
