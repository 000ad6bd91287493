//! `rhdh-local settings`: show and set tool settings.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::HubUtilities;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;

/// Settings subcommands.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show current settings
    Show,
    /// Set a setting (repo.path, repo.url, rhdh.url)
    Set {
        /// Setting key
        key: String,
        /// Setting value
        value: String,
    },
    /// Show built-in defaults
    Defaults,
}

/// Run the settings command.
///
/// # Errors
///
/// Returns an error if the key or value is invalid or the settings file
/// cannot be read or written.
pub async fn run(app: &AppContext, cmd: SettingsCommand) -> Result<ExitCode> {
    match cmd {
        SettingsCommand::Show => {
            let config = config_service::load_config(&app.store)?;
            app.renderer().render_settings(&config, &app.store.path()?)?;
        }
        SettingsCommand::Set { key, value } => {
            let config = config_service::set_value(&app.store, &key, &value)?;
            tracing::debug!(?config, "settings saved");
            app.renderer().render_done(
                "settings-set",
                &format!("Set {key} = {}", value.trim()),
                Some(&app.store.path()?),
            )?;
        }
        SettingsCommand::Defaults => {
            let defaults = app.hub()?.get_default_configuration().await?;
            app.renderer()
                .render_settings(&defaults, std::path::Path::new("built-in defaults"))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
