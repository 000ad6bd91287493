//! Unit tests for the rhdh-local CLI
//!
//! These tests use mocked ports and run fast without spawning git or
//! podman-compose.

mod configuration_service;
mod helpers;
mod installation_service;
mod logs_service;
mod property_tests;
mod repository_service;
mod settings_store;
