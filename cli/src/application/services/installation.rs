//! Application service: installation checks, cloning and `.env` setup.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{ComposeClient, GitClient, HubFs, ProgressReporter};
use crate::application::services::{ensure_success, find_compose_file};
use crate::domain::configuration::ENV_SAMPLES;
use crate::domain::{HubError, InstallationProbe, build_check};
use rhdh_common::InstallationCheck;

/// Probe the tools and the checkout.
///
/// Never fails: a tool that cannot be spawned is reported as unavailable.
pub async fn check_installation(
    git: &impl GitClient,
    compose: &impl ComposeClient,
    fs: &impl HubFs,
    repo: &Path,
) -> InstallationCheck {
    let (git_out, compose_out) = tokio::join!(git.version(), compose.version());

    let version_stdout = |out: Result<std::process::Output>, tool: &str| match out {
        Ok(o) if o.status.success() => Some(String::from_utf8_lossy(&o.stdout).into_owned()),
        Ok(o) => {
            tracing::debug!(tool, status = ?o.status, "version probe exited unsuccessfully");
            None
        }
        Err(e) => {
            tracing::debug!(tool, error = %e, "version probe failed");
            None
        }
    };

    let repo_exists = fs.exists(repo);
    build_check(InstallationProbe {
        repo_path: repo.to_path_buf(),
        repo_exists,
        compose_file: if repo_exists {
            find_compose_file(fs, repo).map(str::to_string)
        } else {
            None
        },
        git_version_output: version_stdout(git_out, "git"),
        podman_compose_version_output: version_stdout(compose_out, "podman-compose"),
    })
}

/// Clone `url` into `target`.
///
/// # Errors
///
/// Returns an error if `target` exists and is not empty, if its parent cannot
/// be created, or if `git clone` fails.
pub async fn clone_repository(
    git: &impl GitClient,
    fs: &impl HubFs,
    reporter: &impl ProgressReporter,
    url: &str,
    target: &Path,
) -> Result<PathBuf> {
    if fs.exists(target) && !fs.is_empty_dir(target)? {
        return Err(HubError::AlreadyCloned {
            path: target.to_path_buf(),
        }
        .into());
    }
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    reporter.step(&format!("cloning {url}..."));
    let target_str = target.to_string_lossy();
    let output = git.clone_repo(url, target).await?;
    ensure_success(output, "git", &["clone", url, &target_str])?;
    tracing::info!(url, target = %target.display(), "repository cloned");
    reporter.success(&format!("cloned into {}", target.display()));
    Ok(target.to_path_buf())
}

/// Create `.env` from the bundled sample when it does not exist yet.
///
/// Returns `true` when a file was created.
///
/// # Errors
///
/// Returns an error if the checkout is missing, no sample file exists, or the
/// copy fails.
pub fn setup_environment(
    fs: &impl HubFs,
    reporter: &impl ProgressReporter,
    repo: &Path,
) -> Result<bool> {
    super::require_installed(fs, repo)?;
    let env_path = repo.join(".env");
    if fs.exists(&env_path) {
        tracing::debug!(path = %env_path.display(), ".env already present");
        return Ok(false);
    }
    let Some(sample) = ENV_SAMPLES
        .iter()
        .map(|name| repo.join(name))
        .find(|p| fs.exists(p))
    else {
        return Err(HubError::MissingEnvSample {
            path: repo.to_path_buf(),
        }
        .into());
    };
    reporter.step("creating .env...");
    fs.copy(&sample, &env_path)?;
    reporter.success(&format!(
        "created .env from {}",
        sample.file_name().unwrap_or_default().to_string_lossy()
    ));
    Ok(true)
}
