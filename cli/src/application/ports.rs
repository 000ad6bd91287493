//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `rhdh_common`, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Utc};
use rhdh_common::HubConfig;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
    /// Run a program with `dir` as its working directory.
    async fn run_in(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
    /// Start a program and return without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn spawn_detached(&self, program: &str, args: &[&str], dir: Option<&Path>) -> Result<()>;
}

// ── Tool Ports ────────────────────────────────────────────────────────────────

/// The `git` operations the hub needs. Every method returns the raw process
/// output; services decide what a non-zero exit means.
#[allow(async_fn_in_trait)]
pub trait GitClient {
    /// `git --version`
    async fn version(&self) -> Result<Output>;
    /// `git clone <url> <target>`
    async fn clone_repo(&self, url: &str, target: &Path) -> Result<Output>;
    /// `git -C <repo> pull --ff-only`
    async fn pull(&self, repo: &Path) -> Result<Output>;
    /// `git -C <repo> reset --hard HEAD`
    async fn reset_hard(&self, repo: &Path) -> Result<Output>;
    /// `git -C <repo> fetch --quiet`
    async fn fetch(&self, repo: &Path) -> Result<Output>;
    /// `git -C <repo> status --porcelain=v2 --branch`
    async fn status(&self, repo: &Path) -> Result<Output>;
}

/// The `podman-compose` operations the hub needs, each run inside `repo`.
#[allow(async_fn_in_trait)]
pub trait ComposeClient {
    /// `podman-compose --version`
    async fn version(&self) -> Result<Output>;
    /// `podman-compose up -d`
    async fn up(&self, repo: &Path) -> Result<Output>;
    /// `podman-compose down`
    async fn down(&self, repo: &Path) -> Result<Output>;
    /// `podman-compose restart <service>`
    async fn restart(&self, repo: &Path, service: &str) -> Result<Output>;
    /// `podman-compose run --rm <service>`
    async fn run_once(&self, repo: &Path, service: &str) -> Result<Output>;
    /// `podman-compose logs [--tail N] <service>`
    async fn logs(&self, repo: &Path, service: &str, tail: Option<usize>) -> Result<Output>;
    /// `podman-compose ps --format json`
    async fn ps(&self, repo: &Path) -> Result<Output>;
}

/// Opens things on the user's desktop.
pub trait DesktopLauncher {
    /// Open `url` in the default browser.
    ///
    /// # Errors
    ///
    /// Returns an error if no opener could be spawned.
    fn open_url(&self, url: &str) -> Result<()>;
    /// Open a terminal window whose working directory is `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if no terminal could be spawned.
    fn open_terminal(&self, dir: &Path) -> Result<()>;
}

// ── Filesystem Ports ──────────────────────────────────────────────────────────

/// Abstracts the filesystem operations performed on the hub checkout.
pub trait HubFs {
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;
    /// Whether `path` is a directory with no entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    fn is_empty_dir(&self, path: &Path) -> Result<bool>;
    /// Create `path` and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Read a UTF-8 file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Replace the contents of `path` atomically (temp file + rename),
    /// creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or renamed into place.
    fn write_atomic(&self, path: &Path, content: &str) -> Result<()>;
    /// Copy `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the copy fails.
    fn copy(&self, from: &Path, to: &Path) -> Result<()>;
    /// Last modification time, `None` when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata cannot be read.
    fn modified(&self, path: &Path) -> Result<Option<DateTime<Utc>>>;
}

/// Abstracts tool settings persistence (load/save).
pub trait ConfigStore {
    /// Load settings, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<HubConfig>;
    /// Persist settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &HubConfig) -> Result<()>;
    /// Location of the settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait: no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

/// A reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}
