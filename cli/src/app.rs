//! Per-invocation state shared by the command handlers, and the wiring of
//! the production hub.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rhdh_common::HubConfig;

use crate::application::ports::ConfigStore;
use crate::application::{HubPorts, LocalHub};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::compose::PodmanCompose;
use crate::infra::config::{YamlConfigStore, settings_dir};
use crate::infra::fs::LocalFs;
use crate::infra::git::GitCli;
use crate::infra::launcher::SystemLauncher;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// The hub as wired for the CLI.
pub type CliHub<'a> = LocalHub<
    GitCli<TokioCommandRunner>,
    PodmanCompose<TokioCommandRunner>,
    LocalFs,
    SystemLauncher<TokioCommandRunner>,
    TerminalReporter<'a>,
>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    /// `--json`: one JSON document on stdout.
    Json,
}

pub struct OutputFlags {
    pub no_color: bool,
    pub quiet: bool,
    pub json: bool,
}

pub struct BehaviourFlags {
    pub yes: bool,
    /// Lists doctor issues and raises the log level to debug.
    pub verbose: bool,
}

/// Global flags, as parsed by [`crate::cli::Cli::flags`].
pub struct AppFlags {
    pub output: OutputFlags,
    pub behaviour: BehaviourFlags,
}

/// Handed to every command handler.
pub struct AppContext {
    /// Quiet whenever `--json` is set, keeping stdout pure JSON.
    pub output: OutputContext,
    pub mode: OutputMode,
    pub store: YamlConfigStore,
    /// Prompts take their default answer: `--yes`, `CI` or `RHDH_LOCAL_YES`.
    pub non_interactive: bool,
    pub verbose: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        let OutputFlags { no_color, quiet, json } = flags.output;
        let unattended = ["CI", "RHDH_LOCAL_YES"]
            .iter()
            .any(|var| std::env::var_os(var).is_some());
        Self {
            output: OutputContext::new(no_color, quiet || json),
            mode: if json { OutputMode::Json } else { OutputMode::Human },
            store: YamlConfigStore,
            non_interactive: flags.behaviour.yes || unattended,
            verbose: flags.behaviour.verbose,
        }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Renderer matching `--json`.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// # Errors
    ///
    /// The settings file exists but is not valid YAML.
    pub fn settings(&self) -> Result<HubConfig> {
        self.store.load()
    }

    /// Build the production hub from the saved settings.
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be loaded or the home directory
    /// cannot be determined.
    pub fn hub(&self) -> Result<CliHub<'_>> {
        let config = self.settings()?;
        let home = dirs::home_dir().context("cannot determine home directory")?;
        let repo_path = config.resolved_repo_path(&home);
        let exports_dir = settings_dir()?.join("exports");
        tracing::debug!(repo = %repo_path.display(), "using checkout");

        let runner = TokioCommandRunner::default();
        Ok(LocalHub::new(
            HubPorts {
                git: GitCli::new(runner),
                compose: PodmanCompose::new(runner),
                fs: LocalFs,
                launcher: SystemLauncher::new(runner),
                reporter: TerminalReporter::new(&self.output),
            },
            config,
            repo_path,
            exports_dir,
        ))
    }

    /// Resolve a user-supplied path, expanding a leading `~`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn expand_path(&self, path: &str) -> Result<PathBuf> {
        let home = dirs::home_dir().context("cannot determine home directory")?;
        Ok(rhdh_common::expand_home(std::path::Path::new(path), &home))
    }

    /// Yes/no prompt; answers `default` without asking when unattended.
    ///
    /// # Errors
    ///
    /// The prompt could not be shown, e.g. stdin is not a terminal.
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        Ok(dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
