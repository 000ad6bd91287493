//! Domain layer: pure parsing, validation and error types.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod compose;
pub mod config;
pub mod configuration;
pub mod error;
pub mod git;
pub mod installation;
pub mod logs;

pub use config::{VALID_CONFIG_KEYS, apply_config_value, validate_config_key, validate_config_value};
pub use error::{ConfigError, HubError};
pub use installation::{InstallationProbe, build_check};
