//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Manage a local Red Hat Developer Hub instance
#[derive(Parser)]
#[command(
    name = "rhdh-local",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also disabled by a set NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Show details and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check git, podman-compose and the checkout
    Doctor,

    /// Clone the rhdh-local repository
    Clone(commands::clone::CloneArgs),

    /// Pull the latest rhdh-local changes (fast-forward only)
    Update,

    /// Create .env from the bundled sample
    Setup,

    /// Show hub or service status
    Status {
        /// Only this service
        service: Option<String>,
    },

    /// Start the hub
    Start,

    /// Stop the hub
    Stop,

    /// Restart the hub or one service
    Restart {
        /// Only this service
        service: Option<String>,
    },

    /// Run the dynamic plugin installer
    InstallPlugins,

    /// Show service logs
    Logs(commands::logs::LogsArgs),

    /// Write all service logs to a file
    ExportLogs,

    /// Read, write and validate hub configuration files
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Git state of the checkout
    #[command(subcommand)]
    Repo(commands::repo::RepoCommand),

    /// Open the hub in a browser
    Open,

    /// Open a terminal in the checkout
    Terminal,

    /// Manage rhdh-local settings
    #[command(subcommand)]
    Settings(commands::settings::SettingsCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Flags shared by every command.
    #[must_use]
    pub fn flags(&self) -> AppFlags {
        AppFlags {
            output: OutputFlags {
                no_color: self.no_color,
                quiet: self.quiet,
                json: self.json,
            },
            behaviour: BehaviourFlags {
                yes: self.yes,
                verbose: self.verbose,
            },
        }
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let app = AppContext::new(&self.flags());
        match self.command {
            Command::Doctor => commands::doctor::run(&app).await,
            Command::Clone(args) => commands::clone::run(&app, &args).await,
            Command::Update => commands::clone::update(&app).await,
            Command::Setup => commands::setup::run(&app).await,
            Command::Status { service } => commands::status::run(&app, service.as_deref()).await,
            Command::Start => commands::lifecycle::start(&app).await,
            Command::Stop => commands::lifecycle::stop(&app).await,
            Command::Restart { service } => {
                commands::lifecycle::restart(&app, service.as_deref()).await
            }
            Command::InstallPlugins => commands::plugins::run(&app).await,
            Command::Logs(args) => commands::logs::run(&app, &args).await,
            Command::ExportLogs => commands::logs::export(&app).await,
            Command::Config(cmd) => commands::config::run(&app, cmd).await,
            Command::Repo(cmd) => commands::repo::run(&app, cmd).await,
            Command::Open => commands::open::browser(&app).await,
            Command::Terminal => commands::open::terminal(&app).await,
            Command::Settings(cmd) => commands::settings::run(&app, cmd).await,
            Command::Version => commands::version::run(&app),
        }
    }
}
