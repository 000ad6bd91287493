//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution with guaranteed timeout and kill on all platforms.

use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::application::ports::CommandRunner;

/// Timeout for quick commands (`--version`, `ps`, `status`, `logs`, `restart`).
pub const SHORT_CMD_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for commands that pull images or talk to a remote
/// (`clone`, `pull`, `up`, `down`, `run`).
pub const LONG_CMD_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// Runs `git` and `podman-compose` as tokio child processes.
///
/// A timed-out child is killed explicitly; dropping the wait future alone
/// leaves it running on Windows.
#[derive(Debug, Clone, Copy)]
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new(SHORT_CMD_TIMEOUT)
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.run_with_timeout(program, args, self.timeout).await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        capture(cmd, program, args, timeout).await
    }

    async fn run_in(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(dir);
        capture(cmd, program, args, timeout).await
    }

    fn spawn_detached(&self, program: &str, args: &[&str], dir: Option<&Path>) -> Result<()> {
        let mut cmd = std::process::Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        tracing::debug!(program, ?args, "spawning detached");
        // The child is deliberately not waited on; it outlives this process.
        cmd.spawn()
            .with_context(|| format!("failed to spawn {program}"))?;
        Ok(())
    }
}

/// Spawn `cmd`, drain both pipes while waiting, and kill it on timeout.
async fn capture(mut cmd: Command, program: &str, args: &[&str], timeout: Duration) -> Result<Output> {
    tracing::debug!(program, ?args, timeout_s = timeout.as_secs(), "running");
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("failed to spawn {program}"))?;

    let mut stdout_handle = child.stdout.take();
    let mut stderr_handle = child.stderr.take();

    tokio::select! {
        result = async {
            let (status, stdout, stderr) = tokio::join!(
                child.wait(),
                async {
                    let mut buf = Vec::new();
                    if let Some(ref mut h) = stdout_handle {
                        let _ = h.read_to_end(&mut buf).await;
                    }
                    buf
                },
                async {
                    let mut buf = Vec::new();
                    if let Some(ref mut h) = stderr_handle {
                        let _ = h.read_to_end(&mut buf).await;
                    }
                    buf
                },
            );
            let status = status.with_context(|| format!("waiting for {program}"))?;
            tracing::debug!(program, code = ?status.code(), "finished");
            Ok(Output { status, stdout, stderr })
        } => result,
        () = tokio::time::sleep(timeout) => {
            let _ = child.kill().await;
            tracing::warn!(program, timeout_s = timeout.as_secs(), "killed after timeout");
            anyhow::bail!("{program} timed out after {}s", timeout.as_secs())
        }
    }
}
