//! Unit tests for git status, pull and reset of the checkout.

#![allow(clippy::expect_used)]

use rhdh_local::application::SilentReporter;
use rhdh_local::application::services::repository::{get_git_status, pull_latest, reset_to_clean};
use rhdh_local::domain::HubError;

use crate::helpers::{err_output, installed_fs, ok_output, repo};
use crate::mocks::{MockFs, MockGit};

#[tokio::test]
async fn git_status_fetches_then_parses() {
    let repo = repo();
    let git = MockGit::default();

    let status = get_git_status(&git, &installed_fs(&repo), &repo)
        .await
        .expect("status");

    assert_eq!(git.calls(), vec!["fetch", "status"]);
    assert_eq!(status.branch, "main");
    assert_eq!(status.commit, "0123456");
    assert!(!status.is_dirty);
    assert_eq!(status.unpulled_commits, 2);
}

#[tokio::test]
async fn git_status_survives_failed_fetch() {
    let repo = repo();
    let git = MockGit {
        fetch: err_output(128, b"fatal: unable to access remote"),
        status: ok_output(
            b"# branch.oid 89abcdef0123456789abcdef0123456789abcdef\n# branch.head main\n1 .M N... 100644 100644 100644 a b configs/app-config/app-config.local.yaml\n",
        ),
        ..MockGit::default()
    };

    let status = get_git_status(&git, &installed_fs(&repo), &repo)
        .await
        .expect("status despite fetch failure");

    assert!(status.is_dirty);
    assert_eq!(status.unpulled_commits, 0);
}

#[tokio::test]
async fn git_status_requires_checkout() {
    let repo = repo();
    let git = MockGit::default();

    let err = get_git_status(&git, &MockFs::default(), &repo)
        .await
        .expect_err("not installed");

    assert!(matches!(
        err.downcast_ref::<HubError>(),
        Some(HubError::NotInstalled { .. })
    ));
    assert!(git.calls().is_empty());
}

#[tokio::test]
async fn pull_non_fast_forward_is_command_failure() {
    let repo = repo();
    let git = MockGit {
        pull: err_output(128, b"fatal: Not possible to fast-forward, aborting."),
        ..MockGit::default()
    };

    let err = pull_latest(&git, &installed_fs(&repo), &SilentReporter, &repo)
        .await
        .expect_err("pull fails");

    assert!(err.to_string().contains("git pull --ff-only failed"), "{err}");
}

#[tokio::test]
async fn reset_runs_hard_reset() {
    let repo = repo();
    let git = MockGit::default();

    reset_to_clean(&git, &installed_fs(&repo), &SilentReporter, &repo)
        .await
        .expect("reset");

    assert_eq!(git.calls(), vec!["reset"]);
}
