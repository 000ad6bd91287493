//! Application service: git state of the checkout.

use std::path::Path;

use anyhow::Result;
use rhdh_common::GitStatus;

use crate::application::ports::{GitClient, HubFs, ProgressReporter};
use crate::application::services::{ensure_success, require_installed};
use crate::domain::git::parse_porcelain_v2;

/// Branch, commit, dirty flag and commits behind upstream.
///
/// Fetches first so the behind count is current; a failed fetch (offline,
/// no upstream) is logged and ignored.
///
/// # Errors
///
/// Returns an error if the checkout is missing or `git status` fails.
pub async fn get_git_status(git: &impl GitClient, fs: &impl HubFs, repo: &Path) -> Result<GitStatus> {
    require_installed(fs, repo)?;
    match git.fetch(repo).await {
        Ok(out) if out.status.success() => {}
        Ok(out) => tracing::warn!(
            stderr = %String::from_utf8_lossy(&out.stderr).trim(),
            "git fetch failed; unpulled count may be stale"
        ),
        Err(e) => tracing::warn!(error = %e, "git fetch failed; unpulled count may be stale"),
    }
    let output = git.status(repo).await?;
    let output = ensure_success(output, "git", &["status", "--porcelain=v2", "--branch"])?;
    parse_porcelain_v2(&String::from_utf8_lossy(&output.stdout))
}

/// Fast-forward the checkout to its upstream.
///
/// # Errors
///
/// Returns an error if the checkout is missing or the pull is not a
/// fast-forward.
pub async fn pull_latest(
    git: &impl GitClient,
    fs: &impl HubFs,
    reporter: &impl ProgressReporter,
    repo: &Path,
) -> Result<()> {
    require_installed(fs, repo)?;
    reporter.step("pulling latest changes...");
    let output = git.pull(repo).await?;
    ensure_success(output, "git", &["pull", "--ff-only"])?;
    tracing::info!(repo = %repo.display(), "repository updated");
    reporter.success("repository up to date");
    Ok(())
}

/// Discard all local modifications to tracked files.
///
/// # Errors
///
/// Returns an error if the checkout is missing or the reset fails.
pub async fn reset_to_clean(
    git: &impl GitClient,
    fs: &impl HubFs,
    reporter: &impl ProgressReporter,
    repo: &Path,
) -> Result<()> {
    require_installed(fs, repo)?;
    reporter.step("resetting to HEAD...");
    let output = git.reset_hard(repo).await?;
    ensure_success(output, "git", &["reset", "--hard", "HEAD"])?;
    tracing::info!(repo = %repo.display(), "repository reset");
    reporter.success("local changes discarded");
    Ok(())
}
