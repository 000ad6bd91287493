//! `rhdh-local config`: read, write and validate hub configuration files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Subcommand;
use rhdh_common::ConfigurationType;
use tokio::io::AsyncReadExt as _;

use crate::app::AppContext;
use crate::application::HubConfiguration;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print a configuration file
    Get {
        /// Configuration kind
        #[arg(value_enum)]
        kind: ConfigurationType,
    },
    /// Validate and replace a configuration file
    Set {
        /// Configuration kind
        #[arg(value_enum)]
        kind: ConfigurationType,
        /// Read new content from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Validate content without writing it
    Validate {
        /// Configuration kind
        #[arg(value_enum)]
        kind: ConfigurationType,
        /// Validate this file instead of the one in the checkout
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the checkout is missing, content cannot be read, or
/// `set` is given invalid content.
pub async fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Get { kind } => get(app, kind).await,
        ConfigCommand::Set { kind, file } => set(app, kind, file).await,
        ConfigCommand::Validate { kind, file } => validate(app, kind, file).await,
    }
}

async fn get(app: &AppContext, kind: ConfigurationType) -> Result<ExitCode> {
    let hub = app.hub()?;
    let file = hub.get_configuration(kind).await?;
    app.renderer().render_configuration(&file)?;
    Ok(ExitCode::SUCCESS)
}

async fn set(app: &AppContext, kind: ConfigurationType, file: Option<PathBuf>) -> Result<ExitCode> {
    let content = read_input(file).await?;
    let hub = app.hub()?;
    let written = hub.update_configuration(kind, &content).await?;
    app.renderer().render_done(
        "config-set",
        &format!("Updated {}", written.path.display()),
        Some(&written.path),
    )?;
    app.output.info("Restart the hub to apply: rhdh-local restart");
    Ok(ExitCode::SUCCESS)
}

async fn validate(
    app: &AppContext,
    kind: ConfigurationType,
    file: Option<PathBuf>,
) -> Result<ExitCode> {
    let hub = app.hub()?;
    let content = match file {
        Some(path) => read_input(Some(path)).await?,
        None => hub.get_configuration(kind).await?.content,
    };
    let report = hub.validate_configuration(kind, &content).await?;
    app.renderer().render_validation(kind, &report)?;
    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Content of `file`, or all of stdin when `None`.
async fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
