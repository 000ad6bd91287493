//! `rhdh-local repo`: git state of the checkout.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::HubRepository;
use crate::commands::with_spinner;

/// Repo subcommands.
#[derive(Subcommand)]
pub enum RepoCommand {
    /// Show branch, commit, local changes and commits behind upstream
    Status,
    /// Fast-forward to the upstream branch
    Pull,
    /// Discard all local changes to tracked files
    Reset,
}

/// Run the repo command.
///
/// # Errors
///
/// Returns an error if the checkout is missing or a git command fails.
pub async fn run(app: &AppContext, cmd: RepoCommand) -> Result<ExitCode> {
    let hub = app.hub()?;
    match cmd {
        RepoCommand::Status => {
            let status = with_spinner(app, "Fetching...", hub.get_git_status()).await?;
            app.renderer().render_git_status(&status)?;
        }
        RepoCommand::Pull => {
            hub.pull_latest().await?;
            app.renderer()
                .render_done("pull", "Repository updated", Some(hub.repo_path()))?;
        }
        RepoCommand::Reset => {
            let prompt = format!(
                "Discard all local changes in {}?",
                hub.repo_path().display()
            );
            if !app.non_interactive && !app.confirm(&prompt, false)? {
                app.output.info("Cancelled.");
                return Ok(ExitCode::SUCCESS);
            }
            hub.reset_to_clean().await?;
            app.renderer()
                .render_done("reset", "Local changes discarded", Some(hub.repo_path()))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
