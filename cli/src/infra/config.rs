//! YAML settings file behind the `ConfigStore` port.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rhdh_common::HubConfig;

use crate::application::ports::ConfigStore;

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV: &str = "RHDH_LOCAL_CONFIG";

/// Directory under `$HOME` holding the settings file and log exports.
pub const SETTINGS_DIR: &str = ".rhdh-local";

/// `~/.rhdh-local`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn settings_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(SETTINGS_DIR))
        .context("cannot determine home directory")
}

/// Settings persisted as YAML at [`ConfigStore::path`].
///
/// A missing or blank file loads as `HubConfig::default()`. The file is
/// written owner-only on Unix.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigStore;

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<HubConfig> {
        let path = self.path()?;
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(HubConfig::default());
            }
            Err(e) => return Err(e).with_context(|| format!("cannot read {}", path.display())),
        };
        if raw.trim().is_empty() {
            return Ok(HubConfig::default());
        }
        serde_yaml::from_str(&raw).with_context(|| format!("invalid settings in {}", path.display()))
    }

    fn save(&self, config: &HubConfig) -> Result<()> {
        let path = self.path()?;
        let yaml = serde_yaml::to_string(config).context("cannot serialize settings")?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
        }
        std::fs::write(&path, yaml).with_context(|| format!("cannot write {}", path.display()))?;
        restrict_to_owner(&path)
    }

    fn path(&self) -> Result<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(custom) => Ok(PathBuf::from(custom)),
            None => Ok(settings_dir()?.join("config.yaml")),
        }
    }
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .with_context(|| format!("cannot chmod {}", path.display()))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn restrict_to_owner(_path: &Path) -> Result<()> {
    Ok(())
}
