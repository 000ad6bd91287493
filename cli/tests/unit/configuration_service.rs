//! Unit tests for reading, validating and writing hub configuration files.

#![allow(clippy::expect_used)]

use rhdh_common::ConfigurationType;
use rhdh_local::application::services::configuration::{
    get_configuration, update_configuration, validate_configuration,
};
use rhdh_local::domain::configuration::relative_path;
use rhdh_local::domain::{ConfigError, HubError};

use crate::helpers::{installed_fs, repo};
use crate::mocks::{MockFs, fixed_mtime};

fn valid_sample(kind: ConfigurationType) -> &'static str {
    match kind {
        ConfigurationType::AppConfig => "app:\n  title: My Hub\n",
        ConfigurationType::DynamicPlugins => {
            "plugins:\n  - package: ./dynamic-plugins/dist/backstage-plugin-techdocs\n    disabled: false\n"
        }
        ConfigurationType::Env => "# local overrides\nBASE_URL=http://localhost:7007\nexport LOG_LEVEL=debug\n",
        ConfigurationType::Users => {
            "apiVersion: backstage.io/v1alpha1\nkind: User\nmetadata:\n  name: guest\nspec:\n  memberOf: []\n"
        }
        ConfigurationType::Components => {
            "apiVersion: backstage.io/v1alpha1\nkind: Component\nmetadata:\n  name: demo\nspec:\n  type: service\n  lifecycle: experimental\n  owner: guests\n"
        }
    }
}

#[test]
fn update_then_get_returns_written_content_for_every_kind() {
    let repo = repo();
    let fs = installed_fs(&repo);

    for kind in ConfigurationType::ALL {
        let content = valid_sample(kind);
        let written = update_configuration(&fs, &repo, kind, content)
            .unwrap_or_else(|e| panic!("{kind}: {e:#}"));
        assert_eq!(written.path, repo.join(relative_path(kind)));

        let read = get_configuration(&fs, &repo, kind).expect("read back");
        assert_eq!(read.kind, kind);
        assert_eq!(read.content, content);
        assert_eq!(read.last_modified, Some(fixed_mtime()));
    }
}

#[test]
fn get_missing_file_is_empty_not_error() {
    let repo = repo();
    let fs = installed_fs(&repo);

    let file = get_configuration(&fs, &repo, ConfigurationType::AppConfig).expect("read");

    assert!(file.content.is_empty());
    assert!(file.last_modified.is_none());
}

#[test]
fn get_requires_checkout() {
    let repo = repo();
    let err = get_configuration(&MockFs::default(), &repo, ConfigurationType::Env)
        .expect_err("not installed");
    assert!(matches!(
        err.downcast_ref::<HubError>(),
        Some(HubError::NotInstalled { .. })
    ));
}

#[test]
fn invalid_update_leaves_existing_file_untouched() {
    let repo = repo();
    let fs = installed_fs(&repo);
    let path = repo.join(relative_path(ConfigurationType::AppConfig));
    fs.add_file(&path, "app:\n  title: Old\n");

    let err = update_configuration(&fs, &repo, ConfigurationType::AppConfig, "app: [unclosed")
        .expect_err("invalid YAML");

    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::Invalid { kind, errors }) => {
            assert_eq!(kind, "app-config");
            assert!(!errors.is_empty());
        }
        other => panic!("expected ConfigError::Invalid, got {other:?}"),
    }
    assert_eq!(fs.file(&path).as_deref(), Some("app:\n  title: Old\n"));
}

#[test]
fn validate_reports_every_env_problem() {
    let report = validate_configuration(
        ConfigurationType::Env,
        "GOOD=1\nnot a pair\n1BAD=2\nGOOD=3\n",
    );
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 3, "{:?}", report.errors);
    assert!(report.errors[0].starts_with("line 2"));
}

#[test]
fn validate_dynamic_plugins_requires_package() {
    let report = validate_configuration(
        ConfigurationType::DynamicPlugins,
        "plugins:\n  - disabled: true\n",
    );
    assert!(!report.valid);
    assert!(report.errors.iter().any(|e| e.contains("plugins[0]")), "{:?}", report.errors);
}

#[test]
fn validate_users_rejects_component_documents() {
    let content = "apiVersion: backstage.io/v1alpha1\nkind: User\nmetadata:\n  name: a\n---\napiVersion: backstage.io/v1alpha1\nkind: Component\nmetadata:\n  name: b\n";
    let report = validate_configuration(ConfigurationType::Users, content);
    assert!(!report.valid);
    assert!(report.errors.iter().any(|e| e.contains("document 2")), "{:?}", report.errors);
}

#[test]
fn validate_empty_content_is_valid() {
    for kind in ConfigurationType::ALL {
        assert!(validate_configuration(kind, "").valid, "{kind} rejected empty content");
    }
}
