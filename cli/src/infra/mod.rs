//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! `git` and `podman-compose` adapters, filesystem access, settings storage
//! and desktop launching.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod compose;
pub mod config;
pub mod fs;
pub mod git;
pub mod launcher;
