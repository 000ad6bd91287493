//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;
use rhdh_common::{
    ConfigurationFile, ConfigurationType, GitStatus, HubConfig, HubLogs, HubStatus,
    InstallationCheck, ServiceName, ServiceStatus, ValidationReport,
};

use crate::output::OutputContext;

/// Renders result records as human-readable terminal output using
/// `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("rhdh-local {version}");
    }

    /// Render the hub status table.
    pub fn render_status(&self, status: &HubStatus) {
        if self.ctx.quiet {
            return;
        }
        if !status.is_installed {
            self.ctx.warn("rhdh-local is not installed. Run: rhdh-local clone");
            return;
        }

        let state = if status.is_running { "running" } else { "stopped" };
        self.ctx.kv("Hub:      ", state);
        if let Some(url) = &status.url {
            self.ctx.kv("URL:      ", url);
        }
        if let Some(path) = &status.repo_path {
            self.ctx.kv("Repo:     ", &path.display().to_string());
        }
        if let (Some(branch), Some(commit)) = (&status.git_branch, &status.git_commit) {
            self.ctx.kv("Git:      ", &format!("{branch} @ {commit}"));
        }

        println!();
        self.ctx.header("Services:");
        for (name, service) in status.services.iter() {
            self.print_service(name, service);
        }
    }

    /// Render the status of one service.
    pub fn render_service_status(&self, name: ServiceName, status: &ServiceStatus) {
        if self.ctx.quiet {
            return;
        }
        self.print_service(name, status);
    }

    fn print_service(&self, name: ServiceName, status: &ServiceStatus) {
        let state = status.status.as_str();
        let mut line = format!(
            "    {:<26} {}",
            name.key(),
            state.style(self.ctx.styles.for_state(status.status))
        );
        if let Some(uptime) = &status.uptime {
            line.push_str(&format!("  {}", format!("up {uptime}").style(self.ctx.styles.dim)));
        }
        if let Some(id) = &status.container_id {
            line.push_str(&format!("  {}", id.style(self.ctx.styles.dim)));
        }
        println!("{line}");
    }

    /// Render installation diagnostics.
    pub fn render_installation(&self, check: &InstallationCheck, verbose: bool) {
        println!();
        println!("  {}", "rhdh-local Health Check".style(self.ctx.styles.header));
        println!();

        println!("  Prerequisites:");
        self.print_check(
            check.git_available,
            &tool_line("git", check.git_available, check.git_version.as_deref()),
        );
        self.print_check(
            check.podman_compose_available,
            &tool_line(
                "podman-compose",
                check.podman_compose_available,
                check.podman_compose_version.as_deref(),
            ),
        );
        println!();

        println!("  Repository:");
        match &check.path {
            Some(path) if check.installed => {
                self.print_check(true, &format!("checkout at {}", path.display()));
            }
            Some(path) => self.print_check(false, &format!("{} has no compose file", path.display())),
            None => self.print_check(false, "not cloned"),
        }
        println!();

        if check.issues.is_empty() {
            println!(
                "  {} Everything looks good!",
                "\u{2713}".style(self.ctx.styles.success)
            );
        } else {
            let hint = if verbose {
                ""
            } else {
                " Run with --verbose for details."
            };
            println!(
                "  {} Found {} issues.{hint}",
                "\u{2717}".style(self.ctx.styles.error),
                check.issues.len(),
            );
            if verbose {
                println!();
                for issue in &check.issues {
                    println!("    {} {issue}", "\u{2717}".style(self.ctx.styles.error));
                }
            }
        }
        println!();
    }

    /// Render git status of the checkout.
    pub fn render_git_status(&self, status: &GitStatus) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.kv("Branch:   ", &status.branch);
        self.ctx.kv("Commit:   ", &status.commit);
        if status.is_dirty {
            self.ctx.warn("Local changes present");
        } else {
            self.ctx.success("Working tree clean");
        }
        match status.unpulled_commits {
            0 => self.ctx.success("Up to date with upstream"),
            n => self
                .ctx
                .info(&format!("{n} commit(s) behind upstream. Run: rhdh-local repo pull")),
        }
    }

    /// Render a validation report.
    pub fn render_validation(&self, kind: ConfigurationType, report: &ValidationReport) {
        if report.valid {
            self.ctx.success(&format!("{kind} configuration is valid"));
            return;
        }
        self.ctx.error(&format!(
            "{kind} configuration has {} error(s):",
            report.errors.len()
        ));
        for error in &report.errors {
            eprintln!("      {error}");
        }
    }

    /// Print a configuration file's content verbatim so it can be piped.
    pub fn render_configuration(&self, file: &ConfigurationFile) {
        if file.last_modified.is_none() && file.content.is_empty() && !self.ctx.quiet {
            eprintln!(
                "  {} {} does not exist yet",
                "\u{2139}".style(self.ctx.styles.info),
                file.path.display()
            );
        }
        print!("{}", file.content);
    }

    /// Render tool settings.
    pub fn render_settings(&self, config: &HubConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Settings ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<12} {}", "repo.path:", config.repo_path.display());
        println!("  {:<12} {}", "repo.url:", config.repo_url);
        println!("  {:<12} {}", "rhdh.url:", config.rhdh_url);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in ["RHDH_LOCAL_CONFIG", "NO_COLOR", "RUST_LOG"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Print raw log text.
    pub fn render_logs(&self, logs: &HubLogs) {
        print!("{}", logs.logs);
        if !logs.logs.is_empty() && !logs.logs.ends_with('\n') {
            println!();
        }
    }

    /// Confirm a completed action.
    pub fn render_done(&self, message: &str) {
        self.ctx.success(message);
    }

    fn print_check(&self, ok: bool, msg: &str) {
        if ok {
            println!("    {} {msg}", "\u{2713}".style(self.ctx.styles.success));
        } else {
            println!("    {} {msg}", "\u{2717}".style(self.ctx.styles.error));
        }
    }
}

/// One prerequisite line, e.g. `git 2.43.0` or `podman-compose not found`.
#[must_use]
pub fn tool_line(tool: &str, available: bool, version: Option<&str>) -> String {
    match (available, version) {
        (true, Some(v)) => format!("{tool} {v}"),
        (true, None) => format!("{tool} (version unknown)"),
        (false, _) => format!("{tool} not found"),
    }
}
