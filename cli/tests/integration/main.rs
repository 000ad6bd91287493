//! Integration tests for the rhdh-local CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior. Every
//! test points `RHDH_LOCAL_CONFIG` at a temporary settings file so the
//! user's real settings are never read or written.

mod cli_tests;
mod config_command;
mod settings_command;
