//! Unit tests for log retrieval and log export.

#![allow(clippy::expect_used)]

use chrono::TimeZone;
use chrono::Utc;
use rhdh_local::application::SilentReporter;
use rhdh_local::application::services::hub_services::get_logs;
use rhdh_local::application::services::utilities::{export_file_name, export_logs};
use rhdh_local::domain::HubError;

use crate::helpers::{installed_fs, repo};
use crate::mocks::{MockCompose, MockFs, RecordingReporter};

const RHDH_LOG: &str = "starting backend\nloaded 12 plugins\nlistening on :7007\n";

#[tokio::test]
async fn logs_are_bounded_even_if_tail_is_ignored() {
    let repo = repo();
    let compose = MockCompose::default().with_logs("rhdh", RHDH_LOG);

    let logs = get_logs(&compose, &installed_fs(&repo), &repo, "rhdh", Some(2))
        .await
        .expect("logs");

    assert_eq!(logs.service, "rhdh");
    assert_eq!(logs.logs, "loaded 12 plugins\nlistening on :7007\n");
    assert_eq!(compose.calls(), vec!["logs rhdh Some(2)"]);
}

#[tokio::test]
async fn logs_without_bound_return_everything() {
    let repo = repo();
    let compose = MockCompose::default().with_logs("db", "ready to accept connections\n");

    let logs = get_logs(&compose, &installed_fs(&repo), &repo, "postgresql", None)
        .await
        .expect("logs");

    assert_eq!(logs.service, "postgresql");
    assert_eq!(logs.logs, "ready to accept connections\n");
}

#[tokio::test]
async fn logs_for_unknown_service_fail_before_spawning() {
    let repo = repo();
    let compose = MockCompose::default();

    let err = get_logs(&compose, &installed_fs(&repo), &repo, "keycloak", None)
        .await
        .expect_err("unknown");

    assert!(matches!(
        err.downcast_ref::<HubError>(),
        Some(HubError::UnknownService(_))
    ));
    assert!(compose.calls().is_empty());
}

#[tokio::test]
async fn export_writes_every_service_and_notes_failures() {
    let repo = repo();
    let fs = installed_fs(&repo);
    // install-dynamic-plugins has no canned logs and fails.
    let compose = MockCompose::default()
        .with_logs("rhdh", RHDH_LOG)
        .with_logs("db", "ready to accept connections");
    let reporter = RecordingReporter::default();
    let exports = repo.join("exports");
    let now = Utc
        .with_ymd_and_hms(2026, 5, 6, 7, 8, 9)
        .single()
        .expect("valid time");

    let path = export_logs(&compose, &fs, &reporter, &repo, &exports, now)
        .await
        .expect("export succeeds");

    assert_eq!(path, exports.join(export_file_name(now)));
    let bundle = fs.file(&path).expect("bundle written");
    assert!(bundle.contains("===== rhdh =====\nstarting backend\n"));
    assert!(bundle.contains("===== postgresql =====\nready to accept connections\n"));
    assert!(bundle.contains("===== install-dynamic-plugins =====\n[failed to collect logs:"));
    assert!(
        reporter
            .events()
            .contains(&"warn: could not collect install-dynamic-plugins logs".to_string())
    );
}

#[tokio::test]
async fn export_requires_checkout() {
    let repo = repo();
    let fs = MockFs::default();

    let err = export_logs(
        &MockCompose::default(),
        &fs,
        &SilentReporter,
        &repo,
        &repo.join("exports"),
        Utc::now(),
    )
    .await
    .expect_err("not installed");

    assert!(matches!(
        err.downcast_ref::<HubError>(),
        Some(HubError::NotInstalled { .. })
    ));
    assert!(fs.paths_under(&repo).is_empty());
}
