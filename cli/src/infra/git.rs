//! `git` CLI adapter implementing the `GitClient` port.

use std::path::Path;
use std::process::Output;

use anyhow::Result;

use crate::application::ports::{CommandRunner, GitClient};
use crate::infra::command_runner::{LONG_CMD_TIMEOUT, SHORT_CMD_TIMEOUT};

const GIT: &str = "git";

/// Runs `git` through a [`CommandRunner`].
pub struct GitCli<R> {
    runner: R,
}

impl<R: CommandRunner> GitCli<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn in_repo(&self, repo: &Path, args: &[&str], timeout: std::time::Duration) -> Result<Output> {
        let repo = repo.to_string_lossy();
        let mut full = vec!["-C", repo.as_ref()];
        full.extend_from_slice(args);
        self.runner.run_with_timeout(GIT, &full, timeout).await
    }
}

impl<R: CommandRunner> GitClient for GitCli<R> {
    async fn version(&self) -> Result<Output> {
        self.runner.run_with_timeout(GIT, &["--version"], SHORT_CMD_TIMEOUT).await
    }

    async fn clone_repo(&self, url: &str, target: &Path) -> Result<Output> {
        let target = target.to_string_lossy();
        self.runner
            .run_with_timeout(GIT, &["clone", url, target.as_ref()], LONG_CMD_TIMEOUT)
            .await
    }

    async fn pull(&self, repo: &Path) -> Result<Output> {
        self.in_repo(repo, &["pull", "--ff-only"], LONG_CMD_TIMEOUT).await
    }

    async fn reset_hard(&self, repo: &Path) -> Result<Output> {
        self.in_repo(repo, &["reset", "--hard", "HEAD"], SHORT_CMD_TIMEOUT).await
    }

    async fn fetch(&self, repo: &Path) -> Result<Output> {
        self.in_repo(repo, &["fetch", "--quiet"], SHORT_CMD_TIMEOUT).await
    }

    async fn status(&self, repo: &Path) -> Result<Output> {
        self.in_repo(repo, &["status", "--porcelain=v2", "--branch"], SHORT_CMD_TIMEOUT)
            .await
    }
}
