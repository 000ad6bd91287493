pub mod config;
pub mod types;

pub use config::{DEFAULT_REPO_PATH, DEFAULT_REPO_URL, DEFAULT_RHDH_URL, HubConfig, expand_home};
pub use types::*;
