//! Application service: reading, validating and writing hub configuration
//! files inside the checkout.

use std::path::Path;

use anyhow::{Context, Result};
use rhdh_common::{ConfigurationFile, ConfigurationType, ValidationReport};

use crate::application::ports::HubFs;
use crate::application::services::require_installed;
use crate::domain::ConfigError;
use crate::domain::configuration::{relative_path, validate};

/// Read the configuration file of the given kind.
///
/// A missing file is not an error: it yields empty content and no timestamp.
///
/// # Errors
///
/// Returns an error if the checkout is missing or the file cannot be read.
pub fn get_configuration(
    fs: &impl HubFs,
    repo: &Path,
    kind: ConfigurationType,
) -> Result<ConfigurationFile> {
    require_installed(fs, repo)?;
    let path = repo.join(relative_path(kind));
    let (content, last_modified) = if fs.exists(&path) {
        let content = fs
            .read_to_string(&path)
            .with_context(|| format!("reading {kind} configuration"))?;
        (content, fs.modified(&path)?)
    } else {
        (String::new(), None)
    };
    Ok(ConfigurationFile {
        kind,
        path,
        content,
        last_modified,
    })
}

/// Validate and atomically replace the configuration file of the given kind.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] with every validation error when the
/// content is rejected, or an error if the checkout is missing or the write
/// fails.
pub fn update_configuration(
    fs: &impl HubFs,
    repo: &Path,
    kind: ConfigurationType,
    content: &str,
) -> Result<ConfigurationFile> {
    require_installed(fs, repo)?;
    let report = validate_configuration(kind, content);
    if !report.valid {
        return Err(ConfigError::Invalid {
            kind: kind.to_string(),
            errors: report.errors,
        }
        .into());
    }
    let path = repo.join(relative_path(kind));
    fs.write_atomic(&path, content)
        .with_context(|| format!("writing {kind} configuration"))?;
    tracing::info!(kind = %kind, path = %path.display(), "configuration updated");
    Ok(ConfigurationFile {
        kind,
        last_modified: fs.modified(&path)?,
        path,
        content: content.to_string(),
    })
}

/// Check content against the rules for its kind without touching disk.
#[must_use]
pub fn validate_configuration(kind: ConfigurationType, content: &str) -> ValidationReport {
    let report = validate(kind, content);
    if !report.valid {
        tracing::debug!(kind = %kind, errors = report.errors.len(), "configuration rejected");
    }
    report
}
