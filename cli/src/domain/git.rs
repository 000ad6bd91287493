//! Parsing of `git status --porcelain=v2 --branch` output.

use anyhow::{Result, bail};
use rhdh_common::GitStatus;

/// Branch name reported when HEAD is detached.
pub const DETACHED_BRANCH: &str = "HEAD (detached)";

/// Length of the abbreviated commit hash in status records.
pub const SHORT_COMMIT_LEN: usize = 7;

/// Parse porcelain v2 status output.
///
/// Header lines (`# branch.*`) supply branch, commit and the behind count;
/// any other non-empty line is a changed or untracked entry and marks the
/// checkout dirty.
///
/// # Errors
///
/// Returns an error if the `# branch.oid` header is missing.
pub fn parse_porcelain_v2(stdout: &str) -> Result<GitStatus> {
    let mut oid = None;
    let mut head = None;
    let mut behind = 0u32;
    let mut is_dirty = false;

    for line in stdout.lines() {
        if let Some(header) = line.strip_prefix("# ") {
            if let Some(v) = header.strip_prefix("branch.oid ") {
                oid = Some(v.trim().to_string());
            } else if let Some(v) = header.strip_prefix("branch.head ") {
                head = Some(v.trim().to_string());
            } else if let Some(v) = header.strip_prefix("branch.ab ") {
                behind = parse_behind(v);
            }
        } else if !line.trim().is_empty() {
            is_dirty = true;
        }
    }

    let Some(oid) = oid else {
        bail!("unexpected git status output: missing branch.oid header");
    };
    let commit = if oid == "(initial)" {
        oid
    } else {
        oid.chars().take(SHORT_COMMIT_LEN).collect()
    };
    let branch = match head.as_deref() {
        None | Some("(detached)") => DETACHED_BRANCH.to_string(),
        Some(name) => name.to_string(),
    };

    Ok(GitStatus {
        branch,
        commit,
        is_dirty,
        unpulled_commits: behind,
    })
}

/// Parse the `-B` half of a `+A -B` ahead/behind header.
fn parse_behind(ab: &str) -> u32 {
    ab.split_whitespace()
        .find_map(|part| part.strip_prefix('-'))
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}
