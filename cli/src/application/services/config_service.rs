//! Application service: tool settings use-cases.

use anyhow::Result;
use rhdh_common::HubConfig;

use crate::application::ports::ConfigStore;
use crate::domain::apply_config_value;

/// Load settings.
pub fn load_config(store: &impl ConfigStore) -> Result<HubConfig> {
    store.load()
}

/// Validate and persist a single `key = value` setting.
///
/// # Errors
///
/// Returns an error if the key is unknown, the value is invalid, or the
/// settings file cannot be read or written. Nothing is written on error.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<HubConfig> {
    let mut config = store.load()?;
    apply_config_value(&mut config, key, value)?;
    store.save(&config)?;
    tracing::info!(key, "setting updated");
    Ok(config)
}
