//! Shared test helpers: output constructors and checkout fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use crate::mocks::MockFs;

/// Process exit status for `code`; Unix keeps it in the high byte of the wait status.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
#[allow(clippy::cast_sign_loss)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

fn output(code: i32, stdout: &[u8], stderr: &[u8]) -> Output {
    Output { status: exit_status(code), stdout: stdout.into(), stderr: stderr.into() }
}

pub fn ok_output(stdout: &[u8]) -> Output {
    output(0, stdout, b"")
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    output(code, b"", stderr)
}

pub fn repo() -> PathBuf {
    PathBuf::from("/home/dev/rhdh-local")
}

/// A checkout with a compose file and an env sample, but no `.env`.
pub fn installed_fs(repo: &Path) -> MockFs {
    let fs = MockFs::default();
    fs.add_file(&repo.join("compose.yaml"), "services: {}\n");
    fs.add_file(&repo.join("env.sample"), "RHDH_IMAGE=quay.io/rhdh/rhdh-hub-rhel9:1.5\n");
    fs
}

pub const PS_ALL_RUNNING: &[u8] = br#"[
  {"Id":"aaa111bbb222ccc333","Names":["rhdh-local_rhdh_1"],"State":"running","StartedAt":0,"Labels":{"com.docker.compose.service":"rhdh"}},
  {"Id":"ddd444eee555fff666","Names":["rhdh-local_db_1"],"State":"running","StartedAt":0,"Labels":{"com.docker.compose.service":"db"}}
]"#;

pub const PORCELAIN_MAIN_CLEAN: &[u8] =
    b"# branch.oid 0123456789abcdef0123456789abcdef01234567\n# branch.head main\n# branch.upstream origin/main\n# branch.ab +0 -2\n";
