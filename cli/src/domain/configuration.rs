//! Locations and content checks for the hub's editable configuration files.
//!
//! Synchronous, no filesystem access.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use rhdh_common::{ConfigurationType, ValidationReport};
use serde::Deserialize;
use serde_yaml::Value;

/// Shell-style environment variable name.
pub static ENV_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex")
});

/// Catalog kinds that belong in the users file.
pub const USER_KINDS: &[&str] = &["User", "Group"];

/// Sample files copied to `.env` by `setup_environment`, in lookup order.
pub const ENV_SAMPLES: &[&str] = &["env.sample", "default.env"];

/// Repository-relative location of each configuration kind.
#[must_use]
pub fn relative_path(kind: ConfigurationType) -> &'static Path {
    Path::new(match kind {
        ConfigurationType::AppConfig => "configs/app-config/app-config.local.yaml",
        ConfigurationType::DynamicPlugins => "configs/dynamic-plugins/dynamic-plugins.override.yaml",
        ConfigurationType::Env => ".env",
        ConfigurationType::Users => "configs/catalog-entities/users.override.yaml",
        ConfigurationType::Components => "configs/catalog-entities/components.override.yaml",
    })
}

/// Validate `content` for the given configuration kind.
///
/// Returns every problem found rather than stopping at the first one.
#[must_use]
pub fn validate(kind: ConfigurationType, content: &str) -> ValidationReport {
    let errors = match kind {
        ConfigurationType::AppConfig => validate_app_config(content),
        ConfigurationType::DynamicPlugins => validate_dynamic_plugins(content),
        ConfigurationType::Env => validate_env(content),
        ConfigurationType::Users => validate_catalog(content, CatalogFile::Users),
        ConfigurationType::Components => validate_catalog(content, CatalogFile::Components),
    };
    ValidationReport::from_errors(errors)
}

// ── app-config ────────────────────────────────────────────────────────────────

fn validate_app_config(content: &str) -> Vec<String> {
    match serde_yaml::from_str::<Value>(content) {
        Ok(Value::Null | Value::Mapping(_)) => Vec::new(),
        Ok(_) => vec!["top level must be a YAML mapping".to_string()],
        Err(e) => vec![format!("invalid YAML: {e}")],
    }
}

// ── dynamic-plugins ───────────────────────────────────────────────────────────

fn validate_dynamic_plugins(content: &str) -> Vec<String> {
    let root = match serde_yaml::from_str::<Value>(content) {
        Ok(Value::Null) => return Vec::new(),
        Ok(Value::Mapping(map)) => map,
        Ok(_) => return vec!["top level must be a YAML mapping".to_string()],
        Err(e) => return vec![format!("invalid YAML: {e}")],
    };

    let mut errors = Vec::new();

    if let Some(includes) = root.get("includes") {
        match includes {
            Value::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !matches!(item, Value::String(_)) {
                        errors.push(format!("includes[{i}] must be a string"));
                    }
                }
            }
            Value::Null => {}
            _ => errors.push("includes must be a list".to_string()),
        }
    }

    if let Some(plugins) = root.get("plugins") {
        match plugins {
            Value::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    errors.extend(validate_plugin_entry(i, item));
                }
            }
            Value::Null => {}
            _ => errors.push("plugins must be a list".to_string()),
        }
    }

    errors
}

fn validate_plugin_entry(index: usize, item: &Value) -> Vec<String> {
    let Value::Mapping(entry) = item else {
        return vec![format!("plugins[{index}] must be a mapping")];
    };
    let mut errors = Vec::new();
    match entry.get("package") {
        Some(Value::String(pkg)) if !pkg.trim().is_empty() => {}
        Some(Value::String(_)) => errors.push(format!("plugins[{index}].package must not be empty")),
        Some(_) => errors.push(format!("plugins[{index}].package must be a string")),
        None => errors.push(format!("plugins[{index}] is missing required field 'package'")),
    }
    if let Some(disabled) = entry.get("disabled")
        && !matches!(disabled, Value::Bool(_))
    {
        errors.push(format!("plugins[{index}].disabled must be true or false"));
    }
    errors
}

// ── catalog entities ──────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq)]
enum CatalogFile {
    Users,
    Components,
}

fn validate_catalog(content: &str, file: CatalogFile) -> Vec<String> {
    let mut errors = Vec::new();
    for (i, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let doc_no = i + 1;
        let value = match Value::deserialize(document) {
            Ok(v) => v,
            Err(e) => {
                errors.push(format!("document {doc_no}: invalid YAML: {e}"));
                // The deserializer cannot resume after a syntax error.
                break;
            }
        };
        match value {
            Value::Null => {}
            Value::Mapping(_) => errors.extend(validate_entity(doc_no, &value, file)),
            _ => errors.push(format!("document {doc_no}: entity must be a YAML mapping")),
        }
    }
    errors
}

fn validate_entity(doc_no: usize, entity: &Value, file: CatalogFile) -> Vec<String> {
    let mut errors = Vec::new();
    let str_field = |v: &Value, key: &str| v.get(key).and_then(Value::as_str).map(str::to_owned);

    if str_field(entity, "apiVersion").is_none_or(|v| v.trim().is_empty()) {
        errors.push(format!("document {doc_no}: missing 'apiVersion'"));
    }

    match str_field(entity, "kind") {
        None => errors.push(format!("document {doc_no}: missing 'kind'")),
        Some(kind) => {
            let is_user_kind = USER_KINDS.contains(&kind.as_str());
            if file == CatalogFile::Users && !is_user_kind {
                errors.push(format!(
                    "document {doc_no}: kind '{kind}' does not belong in the users file (expected User or Group)"
                ));
            }
            if file == CatalogFile::Components && is_user_kind {
                errors.push(format!(
                    "document {doc_no}: kind '{kind}' belongs in the users file"
                ));
            }
        }
    }

    let name = entity
        .get("metadata")
        .and_then(|m| str_field(m, "name"));
    if name.is_none_or(|n| n.trim().is_empty()) {
        errors.push(format!("document {doc_no}: missing 'metadata.name'"));
    }

    errors
}

// ── env ───────────────────────────────────────────────────────────────────────

fn validate_env(content: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, raw) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, _value)) = line.split_once('=') else {
            errors.push(format!("line {line_no}: expected KEY=VALUE"));
            continue;
        };
        let key = key.trim();
        if !ENV_KEY_RE.is_match(key) {
            errors.push(format!("line {line_no}: invalid variable name '{key}'"));
            continue;
        }
        if !seen.insert(key.to_string()) {
            errors.push(format!("line {line_no}: duplicate variable '{key}'"));
        }
    }

    errors
}
