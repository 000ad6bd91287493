use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_REPO_PATH: &str = "~/rhdh-local";
pub const DEFAULT_REPO_URL: &str = "https://github.com/redhat-developer/rhdh-local.git";
pub const DEFAULT_RHDH_URL: &str = "http://localhost:7007";

/// Where the hub checkout lives, where it comes from, and where it is served.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HubConfig {
    /// Local checkout path. A leading `~` is expanded against the home directory.
    pub repo_path: PathBuf,
    /// Remote repository cloned by `clone`.
    pub repo_url: String,
    /// URL the hub is served on once running.
    pub rhdh_url: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from(DEFAULT_REPO_PATH),
            repo_url: DEFAULT_REPO_URL.to_string(),
            rhdh_url: DEFAULT_RHDH_URL.to_string(),
        }
    }
}

impl HubConfig {
    /// Repository path with `~` expanded against `home`.
    #[must_use]
    pub fn resolved_repo_path(&self, home: &Path) -> PathBuf {
        expand_home(&self.repo_path, home)
    }
}

/// Expand a leading `~` or `~/` in `path` to `home`.
#[must_use]
pub fn expand_home(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
