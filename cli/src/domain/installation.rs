//! Installation diagnostics: tool version parsing and issue collection.

use std::path::PathBuf;

use rhdh_common::InstallationCheck;
use semver::Version;

/// Oldest podman-compose whose `ps` understands `--format json`.
pub const MIN_PODMAN_COMPOSE_VERSION: &str = "1.0.6";

/// Raw probe results gathered by the installation service.
#[derive(Debug, Default)]
pub struct InstallationProbe {
    /// Repository path the probe looked at.
    pub repo_path: PathBuf,
    /// Whether the repository directory exists.
    pub repo_exists: bool,
    /// Compose file found at the repository root, if any.
    pub compose_file: Option<String>,
    /// `git --version` stdout when the command succeeded.
    pub git_version_output: Option<String>,
    /// `podman-compose --version` stdout when the command succeeded.
    pub podman_compose_version_output: Option<String>,
}

/// Extract `tool`'s version from a `--version` banner.
///
/// Lines naming `tool` are searched first, so a multi-line banner that also
/// reports the podman version yields the podman-compose one.
#[must_use]
pub fn parse_tool_version(output: &str, tool: &str) -> Option<String> {
    output
        .lines()
        .filter(|line| line.contains(tool))
        .find_map(first_version)
        .or_else(|| first_version(output))
}

fn first_version(text: &str) -> Option<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .map(|tok| tok.trim_start_matches('v'))
        .find(|tok| {
            tok.contains('.')
                && tok.split('.').next().is_some_and(|major| {
                    !major.is_empty() && major.chars().all(|c| c.is_ascii_digit())
                })
        })
        .map(str::to_string)
}

/// Whether `version` (possibly `major.minor`) is at least `min`.
///
/// Unparseable versions are given the benefit of the doubt.
#[must_use]
pub fn version_at_least(version: &str, min: &str) -> bool {
    let normalize = |v: &str| {
        let core = v.split(['-', '+']).next().unwrap_or(v);
        let parts: Vec<&str> = core.split('.').collect();
        match parts.len() {
            1 => format!("{core}.0.0"),
            2 => format!("{core}.0"),
            _ => parts[..3].join("."),
        }
    };
    match (Version::parse(&normalize(version)), Version::parse(&normalize(min))) {
        (Ok(v), Ok(m)) => v >= m,
        _ => true,
    }
}

/// Turn probe results into an [`InstallationCheck`] with one issue per
/// failed check.
#[must_use]
pub fn build_check(probe: InstallationProbe) -> InstallationCheck {
    let git_available = probe.git_version_output.is_some();
    let podman_compose_available = probe.podman_compose_version_output.is_some();
    let installed = probe.repo_exists && probe.compose_file.is_some();

    let mut issues = Vec::new();
    if !git_available {
        issues.push("git is not installed or not on PATH".to_string());
    }
    let podman_compose_version = probe
        .podman_compose_version_output
        .as_deref()
        .and_then(|out| parse_tool_version(out, "podman-compose"));
    if !podman_compose_available {
        issues.push("podman-compose is not installed or not on PATH".to_string());
    } else if let Some(v) = podman_compose_version.as_deref()
        && !version_at_least(v, MIN_PODMAN_COMPOSE_VERSION)
    {
        issues.push(format!(
            "podman-compose {v} is too old (need \u{2265} {MIN_PODMAN_COMPOSE_VERSION})"
        ));
    }
    if !probe.repo_exists {
        issues.push(format!(
            "Repository not found at {} (run: rhdh-local clone)",
            probe.repo_path.display()
        ));
    } else if probe.compose_file.is_none() {
        issues.push(format!(
            "No compose file in {}; is this an rhdh-local checkout?",
            probe.repo_path.display()
        ));
    }

    InstallationCheck {
        installed,
        path: probe.repo_exists.then_some(probe.repo_path),
        git_available,
        podman_compose_available,
        git_version: probe
            .git_version_output
            .as_deref()
            .and_then(|out| parse_tool_version(out, "git")),
        podman_compose_version,
        issues,
    }
}
