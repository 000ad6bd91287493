//! `podman-compose` CLI adapter implementing the `ComposeClient` port.
//!
//! Every call runs with the checkout as working directory so compose picks up
//! the project's compose file and `.env`.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{CommandRunner, ComposeClient};
use crate::infra::command_runner::{LONG_CMD_TIMEOUT, SHORT_CMD_TIMEOUT};

const PODMAN_COMPOSE: &str = "podman-compose";

/// Runs `podman-compose` through a [`CommandRunner`].
pub struct PodmanCompose<R> {
    runner: R,
}

impl<R: CommandRunner> PodmanCompose<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn in_repo(&self, repo: &Path, args: &[&str], timeout: Duration) -> Result<Output> {
        self.runner.run_in(repo, PODMAN_COMPOSE, args, timeout).await
    }
}

impl<R: CommandRunner> ComposeClient for PodmanCompose<R> {
    async fn version(&self) -> Result<Output> {
        self.runner
            .run_with_timeout(PODMAN_COMPOSE, &["--version"], SHORT_CMD_TIMEOUT)
            .await
    }

    async fn up(&self, repo: &Path) -> Result<Output> {
        self.in_repo(repo, &["up", "-d"], LONG_CMD_TIMEOUT).await
    }

    async fn down(&self, repo: &Path) -> Result<Output> {
        self.in_repo(repo, &["down"], LONG_CMD_TIMEOUT).await
    }

    async fn restart(&self, repo: &Path, service: &str) -> Result<Output> {
        self.in_repo(repo, &["restart", service], SHORT_CMD_TIMEOUT).await
    }

    async fn run_once(&self, repo: &Path, service: &str) -> Result<Output> {
        self.in_repo(repo, &["run", "--rm", service], LONG_CMD_TIMEOUT).await
    }

    async fn logs(&self, repo: &Path, service: &str, tail: Option<usize>) -> Result<Output> {
        match tail {
            Some(n) => {
                let n = n.to_string();
                self.in_repo(repo, &["logs", "--tail", &n, service], SHORT_CMD_TIMEOUT)
                    .await
            }
            None => self.in_repo(repo, &["logs", service], SHORT_CMD_TIMEOUT).await,
        }
    }

    async fn ps(&self, repo: &Path) -> Result<Output> {
        self.in_repo(repo, &["ps", "--format", "json"], SHORT_CMD_TIMEOUT).await
    }
}
