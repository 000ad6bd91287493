//! Terminal and JSON presentation of hub results.

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
use rhdh_common::{
    ConfigurationFile, ConfigurationType, GitStatus, HubConfig, HubLogs, HubStatus,
    InstallationCheck, ServiceName, ServiceStatus, ValidationReport,
};

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Palette plus the terminal facts that decide what gets printed.
pub struct OutputContext {
    pub styles: Styles,
    /// stdout is attached to a terminal.
    pub is_tty: bool,
    /// Only errors reach the terminal.
    pub quiet: bool,
}

impl OutputContext {
    /// Colours are used only on a terminal, and never with `--no-color` or
    /// `NO_COLOR` set.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let mut styles = Styles::default();
        if is_tty && !no_color && std::env::var_os("NO_COLOR").is_none() {
            styles.colorize();
        }
        Self { styles, is_tty, quiet }
    }

    /// Spinners need a terminal and a non-quiet run.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    fn marked(&self, mark: &str, style: owo_colors::Style, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", mark.style(style));
        }
    }

    pub fn success(&self, msg: &str) {
        self.marked("✓", self.styles.success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.marked("⚠", self.styles.warning, msg);
    }

    /// Goes to stderr and ignores `quiet`.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    pub fn info(&self, msg: &str) {
        self.marked("ℹ", self.styles.info, msg);
    }

    /// Section title such as `Services:`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// `key  value` with the key dimmed.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Human or JSON rendering, chosen once per invocation.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// JSON serialization failure.
    pub fn render_status(&self, status: &HubStatus) -> Result<()> {
        match self {
            Self::Human(r) => r.render_status(status),
            Self::Json(r) => r.render_status(status)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// JSON serialization failure.
    pub fn render_service_status(&self, name: ServiceName, status: &ServiceStatus) -> Result<()> {
        match self {
            Self::Human(r) => r.render_service_status(name, status),
            Self::Json(r) => r.render_service_status(name, status)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// JSON serialization failure.
    pub fn render_installation(&self, check: &InstallationCheck, verbose: bool) -> Result<()> {
        match self {
            Self::Human(r) => r.render_installation(check, verbose),
            Self::Json(r) => r.render_installation(check)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// JSON serialization failure.
    pub fn render_git_status(&self, status: &GitStatus) -> Result<()> {
        match self {
            Self::Human(r) => r.render_git_status(status),
            Self::Json(r) => r.render_git_status(status)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// JSON serialization failure.
    pub fn render_validation(&self, kind: ConfigurationType, report: &ValidationReport) -> Result<()> {
        match self {
            Self::Human(r) => r.render_validation(kind, report),
            Self::Json(r) => r.render_validation(kind, report)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// JSON serialization failure.
    pub fn render_configuration(&self, file: &ConfigurationFile) -> Result<()> {
        match self {
            Self::Human(r) => r.render_configuration(file),
            Self::Json(r) => r.render_configuration(file)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// JSON serialization failure.
    pub fn render_settings(&self, config: &HubConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => r.render_settings(config, path),
            Self::Json(r) => r.render_settings(config, path)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// JSON serialization failure.
    pub fn render_logs(&self, logs: &HubLogs) -> Result<()> {
        match self {
            Self::Human(r) => r.render_logs(logs),
            Self::Json(r) => r.render_logs(logs)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// JSON serialization failure.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => r.render_version(version),
            Self::Json(r) => r.render_version(version)?,
        }
        Ok(())
    }

    /// Report a completed mutating action. `action` names it in JSON output;
    /// `message` is shown to humans.
    ///
    /// # Errors
    ///
    /// JSON serialization failure.
    pub fn render_done(&self, action: &str, message: &str, path: Option<&Path>) -> Result<()> {
        match self {
            Self::Human(r) => r.render_done(message),
            Self::Json(r) => r.render_done(action, path)?,
        }
        Ok(())
    }
}
