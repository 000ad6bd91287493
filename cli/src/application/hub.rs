//! The local hub API: capability traits and the implementation that drives
//! `git`, `podman-compose` and the filesystem through injected ports.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use rhdh_common::{
    ConfigurationFile, ConfigurationType, GitStatus, HubConfig, HubLogs, HubStatus,
    InstallationCheck, ServiceName, ServiceStatus, ValidationReport,
};

use crate::application::ports::{
    ComposeClient, DesktopLauncher, GitClient, HubFs, ProgressReporter,
};
use crate::application::services::{
    configuration, hub_services, installation, lifecycle, repository, utilities,
};

// ── Capability traits ─────────────────────────────────────────────────────────

/// Checkout presence, cloning and first-time setup.
#[allow(async_fn_in_trait)]
pub trait HubInstallation {
    /// Probe tools and checkout. Read-only.
    async fn check_installation(&self) -> Result<InstallationCheck>;
    /// Clone the hub repository into `target` (or the configured path).
    async fn clone_repository(&self, target: Option<&Path>) -> Result<PathBuf>;
    /// Fast-forward the checkout.
    async fn update_repository(&self) -> Result<()>;
    /// Create `.env` from the sample when missing.
    async fn setup_environment(&self) -> Result<()>;
}

/// Whole-stack status and lifecycle.
#[allow(async_fn_in_trait)]
pub trait HubLifecycle {
    async fn get_status(&self) -> Result<HubStatus>;
    async fn start(&self) -> Result<()>;
    async fn stop(&self) -> Result<()>;
    async fn restart(&self) -> Result<()>;
    async fn restart_service(&self, name: &str) -> Result<ServiceName>;
}

/// Operations on individual services.
#[allow(async_fn_in_trait)]
pub trait HubServiceOps {
    async fn install_plugins(&self) -> Result<()>;
    async fn get_logs(&self, service: &str, lines: Option<usize>) -> Result<HubLogs>;
    async fn get_service_status(&self, service: &str) -> Result<ServiceStatus>;
}

/// Editable configuration files in the checkout.
#[allow(async_fn_in_trait)]
pub trait HubConfiguration {
    async fn get_configuration(&self, kind: ConfigurationType) -> Result<ConfigurationFile>;
    async fn update_configuration(
        &self,
        kind: ConfigurationType,
        content: &str,
    ) -> Result<ConfigurationFile>;
    async fn validate_configuration(
        &self,
        kind: ConfigurationType,
        content: &str,
    ) -> Result<ValidationReport>;
}

/// Git state of the checkout.
#[allow(async_fn_in_trait)]
pub trait HubRepository {
    async fn get_git_status(&self) -> Result<GitStatus>;
    async fn pull_latest(&self) -> Result<()>;
    /// Discards local changes to tracked files. Destructive.
    async fn reset_to_clean(&self) -> Result<()>;
}

/// Desktop integration, defaults and log export.
#[allow(async_fn_in_trait)]
pub trait HubUtilities {
    async fn open_rhdh_in_browser(&self) -> Result<()>;
    async fn open_repository_in_terminal(&self) -> Result<()>;
    async fn get_default_configuration(&self) -> Result<HubConfig>;
    /// Returns the path of the written log bundle.
    async fn export_logs(&self) -> Result<PathBuf>;
}

/// Composite trait: any type implementing all six capabilities is a
/// `LocalHubApi`.
pub trait LocalHubApi:
    HubInstallation + HubLifecycle + HubServiceOps + HubConfiguration + HubRepository + HubUtilities
{
}

/// Blanket implementation: any type implementing all six sub-traits is a
/// `LocalHubApi`.
impl<T> LocalHubApi for T where
    T: HubInstallation
        + HubLifecycle
        + HubServiceOps
        + HubConfiguration
        + HubRepository
        + HubUtilities
{
}

// ── Implementation ────────────────────────────────────────────────────────────

/// Adapters a [`LocalHub`] drives.
pub struct HubPorts<G, C, F, L, P> {
    pub git: G,
    pub compose: C,
    pub fs: F,
    pub launcher: L,
    pub reporter: P,
}

/// [`LocalHubApi`] over injected `git`, compose, filesystem and launcher
/// ports.
pub struct LocalHub<G, C, F, L, P> {
    ports: HubPorts<G, C, F, L, P>,
    config: HubConfig,
    repo_path: PathBuf,
    exports_dir: PathBuf,
}

impl<G, C, F, L, P> LocalHub<G, C, F, L, P>
where
    G: GitClient,
    C: ComposeClient,
    F: HubFs,
    L: DesktopLauncher,
    P: ProgressReporter,
{
    /// `repo_path` must already have `~` expanded.
    #[must_use]
    pub fn new(
        ports: HubPorts<G, C, F, L, P>,
        config: HubConfig,
        repo_path: PathBuf,
        exports_dir: PathBuf,
    ) -> Self {
        Self {
            ports,
            config,
            repo_path,
            exports_dir,
        }
    }

    #[must_use]
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    #[must_use]
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

impl<G, C, F, L, P> HubInstallation for LocalHub<G, C, F, L, P>
where
    G: GitClient,
    C: ComposeClient,
    F: HubFs,
    L: DesktopLauncher,
    P: ProgressReporter,
{
    async fn check_installation(&self) -> Result<InstallationCheck> {
        Ok(installation::check_installation(
            &self.ports.git,
            &self.ports.compose,
            &self.ports.fs,
            &self.repo_path,
        )
        .await)
    }

    async fn clone_repository(&self, target: Option<&Path>) -> Result<PathBuf> {
        let target = target.unwrap_or(&self.repo_path);
        installation::clone_repository(
            &self.ports.git,
            &self.ports.fs,
            &self.ports.reporter,
            &self.config.repo_url,
            target,
        )
        .await
    }

    async fn update_repository(&self) -> Result<()> {
        self.pull_latest().await
    }

    async fn setup_environment(&self) -> Result<()> {
        installation::setup_environment(&self.ports.fs, &self.ports.reporter, &self.repo_path)
            .map(|_| ())
    }
}

impl<G, C, F, L, P> HubLifecycle for LocalHub<G, C, F, L, P>
where
    G: GitClient,
    C: ComposeClient,
    F: HubFs,
    L: DesktopLauncher,
    P: ProgressReporter,
{
    async fn get_status(&self) -> Result<HubStatus> {
        Ok(lifecycle::get_status(
            &self.ports.git,
            &self.ports.compose,
            &self.ports.fs,
            &self.repo_path,
            &self.config.rhdh_url,
        )
        .await)
    }

    async fn start(&self) -> Result<()> {
        lifecycle::start(&self.ports.compose, &self.ports.fs, &self.ports.reporter, &self.repo_path)
            .await
    }

    async fn stop(&self) -> Result<()> {
        lifecycle::stop(&self.ports.compose, &self.ports.fs, &self.ports.reporter, &self.repo_path)
            .await
    }

    async fn restart(&self) -> Result<()> {
        lifecycle::restart(&self.ports.compose, &self.ports.fs, &self.ports.reporter, &self.repo_path)
            .await
    }

    async fn restart_service(&self, name: &str) -> Result<ServiceName> {
        lifecycle::restart_service(
            &self.ports.compose,
            &self.ports.fs,
            &self.ports.reporter,
            &self.repo_path,
            name,
        )
        .await
    }
}

impl<G, C, F, L, P> HubServiceOps for LocalHub<G, C, F, L, P>
where
    G: GitClient,
    C: ComposeClient,
    F: HubFs,
    L: DesktopLauncher,
    P: ProgressReporter,
{
    async fn install_plugins(&self) -> Result<()> {
        hub_services::install_plugins(
            &self.ports.compose,
            &self.ports.fs,
            &self.ports.reporter,
            &self.repo_path,
        )
        .await
    }

    async fn get_logs(&self, service: &str, lines: Option<usize>) -> Result<HubLogs> {
        hub_services::get_logs(&self.ports.compose, &self.ports.fs, &self.repo_path, service, lines)
            .await
    }

    async fn get_service_status(&self, service: &str) -> Result<ServiceStatus> {
        hub_services::get_service_status(&self.ports.compose, &self.ports.fs, &self.repo_path, service)
            .await
    }
}

impl<G, C, F, L, P> HubConfiguration for LocalHub<G, C, F, L, P>
where
    G: GitClient,
    C: ComposeClient,
    F: HubFs,
    L: DesktopLauncher,
    P: ProgressReporter,
{
    async fn get_configuration(&self, kind: ConfigurationType) -> Result<ConfigurationFile> {
        configuration::get_configuration(&self.ports.fs, &self.repo_path, kind)
    }

    async fn update_configuration(
        &self,
        kind: ConfigurationType,
        content: &str,
    ) -> Result<ConfigurationFile> {
        configuration::update_configuration(&self.ports.fs, &self.repo_path, kind, content)
    }

    async fn validate_configuration(
        &self,
        kind: ConfigurationType,
        content: &str,
    ) -> Result<ValidationReport> {
        Ok(configuration::validate_configuration(kind, content))
    }
}

impl<G, C, F, L, P> HubRepository for LocalHub<G, C, F, L, P>
where
    G: GitClient,
    C: ComposeClient,
    F: HubFs,
    L: DesktopLauncher,
    P: ProgressReporter,
{
    async fn get_git_status(&self) -> Result<GitStatus> {
        repository::get_git_status(&self.ports.git, &self.ports.fs, &self.repo_path).await
    }

    async fn pull_latest(&self) -> Result<()> {
        repository::pull_latest(&self.ports.git, &self.ports.fs, &self.ports.reporter, &self.repo_path)
            .await
    }

    async fn reset_to_clean(&self) -> Result<()> {
        repository::reset_to_clean(
            &self.ports.git,
            &self.ports.fs,
            &self.ports.reporter,
            &self.repo_path,
        )
        .await
    }
}

impl<G, C, F, L, P> HubUtilities for LocalHub<G, C, F, L, P>
where
    G: GitClient,
    C: ComposeClient,
    F: HubFs,
    L: DesktopLauncher,
    P: ProgressReporter,
{
    async fn open_rhdh_in_browser(&self) -> Result<()> {
        utilities::open_rhdh_in_browser(&self.ports.launcher, &self.config.rhdh_url)
    }

    async fn open_repository_in_terminal(&self) -> Result<()> {
        utilities::open_repository_in_terminal(&self.ports.launcher, &self.ports.fs, &self.repo_path)
    }

    async fn get_default_configuration(&self) -> Result<HubConfig> {
        Ok(utilities::get_default_configuration())
    }

    async fn export_logs(&self) -> Result<PathBuf> {
        utilities::export_logs(
            &self.ports.compose,
            &self.ports.fs,
            &self.ports.reporter,
            &self.repo_path,
            &self.exports_dir,
            Utc::now(),
        )
        .await
    }
}
