//! Unit tests for installation checks, cloning and `.env` setup.

#![allow(clippy::expect_used)]

use rhdh_local::application::services::installation::{
    check_installation, clone_repository, setup_environment,
};
use rhdh_local::application::SilentReporter;
use rhdh_local::domain::HubError;

use crate::helpers::{err_output, installed_fs, repo};
use crate::mocks::{MockCompose, MockFs, MockGit, RecordingReporter};

#[tokio::test]
async fn check_installation_healthy_checkout_has_no_issues() {
    let repo = repo();
    let fs = installed_fs(&repo);

    let check = check_installation(&MockGit::default(), &MockCompose::default(), &fs, &repo).await;

    assert!(check.installed);
    assert!(check.issues.is_empty(), "{:?}", check.issues);
    assert_eq!(check.git_version.as_deref(), Some("2.43.0"));
    assert_eq!(check.podman_compose_version.as_deref(), Some("1.0.6"));
}

#[tokio::test]
async fn check_installation_without_checkout_reports_issue() {
    let repo = repo();
    let check = check_installation(
        &MockGit::default(),
        &MockCompose::default(),
        &MockFs::default(),
        &repo,
    )
    .await;

    assert!(!check.installed);
    assert!(check.path.is_none());
    assert!(!check.issues.is_empty());
    assert!(check.issues.iter().any(|i| i.contains("rhdh-local clone")));
}

#[tokio::test]
async fn check_installation_missing_tools_never_errors() {
    let repo = repo();
    let git = MockGit {
        version: None,
        ..MockGit::default()
    };
    let compose = MockCompose {
        version: Some(err_output(127, b"podman-compose: command not found")),
        ..MockCompose::default()
    };

    let check = check_installation(&git, &compose, &installed_fs(&repo), &repo).await;

    assert!(check.installed);
    assert!(!check.git_available);
    assert!(!check.podman_compose_available);
    assert_eq!(check.issues.len(), 2, "{:?}", check.issues);
}

#[tokio::test]
async fn clone_into_missing_target_creates_parent_and_clones() {
    let repo = repo();
    let fs = MockFs::default();
    let git = MockGit::default();
    let reporter = RecordingReporter::default();

    let path = clone_repository(&git, &fs, &reporter, "https://example.com/rhdh-local.git", &repo)
        .await
        .expect("clone succeeds");

    assert_eq!(path, repo);
    assert_eq!(
        git.calls(),
        vec![format!("clone https://example.com/rhdh-local.git {}", repo.display())]
    );
    assert!(fs.dirs.lock().expect("dirs").contains(repo.parent().expect("parent")));
    assert!(reporter.events().iter().any(|e| e.starts_with("success:")));
}

#[tokio::test]
async fn clone_into_non_empty_target_is_refused_without_running_git() {
    let repo = repo();
    let fs = installed_fs(&repo);
    let git = MockGit::default();

    let err = clone_repository(&git, &fs, &SilentReporter, "https://example.com/x.git", &repo)
        .await
        .expect_err("non-empty target");

    assert!(matches!(
        err.downcast_ref::<HubError>(),
        Some(HubError::AlreadyCloned { .. })
    ));
    assert!(git.calls().is_empty());
}

#[tokio::test]
async fn clone_into_empty_existing_directory_is_allowed() {
    let repo = repo();
    let fs = MockFs::default();
    fs.add_dir(&repo);
    let git = MockGit::default();

    clone_repository(&git, &fs, &SilentReporter, "https://example.com/x.git", &repo)
        .await
        .expect("empty dir is fine");
    assert_eq!(git.calls().len(), 1);
}

#[tokio::test]
async fn clone_failure_surfaces_git_stderr() {
    let repo = repo();
    let git = MockGit {
        clone: err_output(128, b"fatal: repository not found"),
        ..MockGit::default()
    };

    let err = clone_repository(&git, &MockFs::default(), &SilentReporter, "https://x/y.git", &repo)
        .await
        .expect_err("clone fails");

    assert!(err.to_string().contains("fatal: repository not found"), "{err}");
}

#[test]
fn setup_environment_copies_sample_once() {
    let repo = repo();
    let fs = installed_fs(&repo);

    let created = setup_environment(&fs, &SilentReporter, &repo).expect("setup succeeds");
    assert!(created);
    assert_eq!(
        fs.file(&repo.join(".env")),
        fs.file(&repo.join("env.sample"))
    );

    fs.add_file(&repo.join(".env"), "CUSTOM=1\n");
    let created = setup_environment(&fs, &SilentReporter, &repo).expect("second setup");
    assert!(!created);
    assert_eq!(fs.file(&repo.join(".env")).as_deref(), Some("CUSTOM=1\n"));
}

#[test]
fn setup_environment_falls_back_to_default_env() {
    let repo = repo();
    let fs = MockFs::default();
    fs.add_file(&repo.join("compose.yaml"), "services: {}\n");
    fs.add_file(&repo.join("default.env"), "A=1\n");

    assert!(setup_environment(&fs, &SilentReporter, &repo).expect("setup"));
    assert_eq!(fs.file(&repo.join(".env")).as_deref(), Some("A=1\n"));
}

#[test]
fn setup_environment_without_sample_fails() {
    let repo = repo();
    let fs = MockFs::default();
    fs.add_file(&repo.join("compose.yaml"), "services: {}\n");

    let err = setup_environment(&fs, &SilentReporter, &repo).expect_err("no sample");
    assert!(matches!(
        err.downcast_ref::<HubError>(),
        Some(HubError::MissingEnvSample { .. })
    ));
}

#[test]
fn setup_environment_requires_checkout() {
    let repo = repo();
    let err = setup_environment(&MockFs::default(), &SilentReporter, &repo).expect_err("missing");
    assert!(matches!(
        err.downcast_ref::<HubError>(),
        Some(HubError::NotInstalled { .. })
    ));
}
