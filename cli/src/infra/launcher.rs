//! Desktop launcher: opens the browser and a terminal via platform tools.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{CommandRunner, DesktopLauncher};

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// Command that opens `url` on `os` (a `std::env::consts::OS` value).
#[must_use]
pub fn browser_command(os: &str, url: &str) -> LaunchCommand {
    match os {
        "macos" => LaunchCommand::new("open", &[url]),
        // The empty string is the window title `start` expects before a URL.
        "windows" => LaunchCommand::new("cmd", &["/C", "start", "", url]),
        _ => LaunchCommand::new("xdg-open", &[url]),
    }
}

/// Command that opens a terminal in `dir` on `os`.
///
/// `$TERMINAL` wins when set; it is started with `dir` as working directory.
#[must_use]
pub fn terminal_command(os: &str, terminal_env: Option<&str>, dir: &Path) -> LaunchCommand {
    if let Some(term) = terminal_env.map(str::trim).filter(|t| !t.is_empty()) {
        return LaunchCommand::new(term, &[]);
    }
    let dir = dir.to_string_lossy();
    match os {
        "macos" => LaunchCommand::new("open", &["-a", "Terminal", dir.as_ref()]),
        "windows" => LaunchCommand::new("cmd", &["/C", "start", "cmd"]),
        _ => LaunchCommand::new("x-terminal-emulator", &[]),
    }
}

/// Production `DesktopLauncher` spawning platform openers through a
/// [`CommandRunner`].
pub struct SystemLauncher<R> {
    runner: R,
}

impl<R: CommandRunner> SystemLauncher<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn launch(&self, cmd: &LaunchCommand, dir: Option<&Path>) -> Result<()> {
        let args: Vec<&str> = cmd.args.iter().map(String::as_str).collect();
        self.runner.spawn_detached(&cmd.program, &args, dir)
    }
}

impl<R: CommandRunner> DesktopLauncher for SystemLauncher<R> {
    fn open_url(&self, url: &str) -> Result<()> {
        self.launch(&browser_command(std::env::consts::OS, url), None)
    }

    fn open_terminal(&self, dir: &Path) -> Result<()> {
        let terminal = std::env::var("TERMINAL").ok();
        let cmd = terminal_command(std::env::consts::OS, terminal.as_deref(), dir);
        self.launch(&cmd, Some(dir))
    }
}
