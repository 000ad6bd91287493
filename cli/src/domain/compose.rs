//! Parsing of `podman-compose ps --format json` output into service statuses.
//!
//! Pure functions only. Accepts either a JSON array (podman) or
//! newline-delimited JSON objects (docker compose v2).

use anyhow::{Context, Result};
use rhdh_common::{HubServices, ServiceName, ServiceState, ServiceStatus};
use serde_json::Value;

/// Label compose implementations attach to every container they create.
pub const SERVICE_LABEL: &str = "com.docker.compose.service";

/// Compose file names recognised at the repository root, in lookup order.
pub const COMPOSE_FILES: &[&str] = &[
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

/// Parse `ps` output into per-service statuses.
///
/// Services without a container are reported as stopped. When several
/// containers belong to the same service, a running one wins.
///
/// # Errors
///
/// Returns an error if the output is not valid JSON.
pub fn parse_ps_output(stdout: &str, now_unix: i64) -> Result<HubServices> {
    let mut services = HubServices::all(ServiceState::Stopped);
    let mut seen = [false; 3];

    for container in containers(stdout)? {
        let Some(name) = container_service(&container) else {
            continue;
        };
        let status = container_status(&container, now_unix);
        let idx = ServiceName::ALL
            .iter()
            .position(|n| *n == name)
            .unwrap_or_default();
        let slot = services.get_mut(name);
        if !seen[idx] || (status.status == ServiceState::Running && slot.status != ServiceState::Running)
        {
            *slot = status;
            seen[idx] = true;
        }
    }
    Ok(services)
}

fn containers(stdout: &str) -> Result<Vec<Value>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        let value: Value = serde_json::from_str(trimmed).context("parsing compose ps output")?;
        return Ok(value.as_array().cloned().unwrap_or_default());
    }
    trimmed
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).context("parsing compose ps output"))
        .collect()
}

/// Work out which hub service a container belongs to.
fn container_service(container: &Value) -> Option<ServiceName> {
    let labelled = container
        .get("Labels")
        .and_then(|labels| match labels {
            Value::Object(map) => map.get(SERVICE_LABEL).and_then(Value::as_str).map(str::to_owned),
            // docker compose renders labels as "k=v,k=v"
            Value::String(s) => s.split(',').find_map(|kv| {
                kv.split_once('=')
                    .filter(|(k, _)| *k == SERVICE_LABEL)
                    .map(|(_, v)| v.to_owned())
            }),
            _ => None,
        })
        .or_else(|| container.get("Service").and_then(Value::as_str).map(str::to_owned));

    if let Some(service) = labelled {
        return match_compose_service(&service);
    }

    let names: Vec<&str> = match container.get("Names").or_else(|| container.get("Name")) {
        Some(Value::Array(arr)) => arr.iter().filter_map(Value::as_str).collect(),
        Some(Value::String(s)) => vec![s.as_str()],
        _ => Vec::new(),
    };
    names.into_iter().find_map(service_from_container_name)
}

fn match_compose_service(service: &str) -> Option<ServiceName> {
    ServiceName::ALL
        .into_iter()
        .find(|n| n.compose_service() == service || n.key() == service)
}

/// Map a container name such as `rhdh-local_db_1` or `rhdh-local-rhdh-1` to a
/// service.
fn service_from_container_name(name: &str) -> Option<ServiceName> {
    let name = name.trim_start_matches('/');
    if let Some(service) = match_compose_service(name) {
        return Some(service);
    }
    let base = name
        .rsplit_once(['_', '-'])
        .filter(|(_, n)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        .map_or(name, |(base, _)| base);
    ServiceName::ALL.into_iter().find(|n| {
        let svc = n.compose_service();
        base.len() > svc.len()
            && base.ends_with(svc)
            && matches!(base.as_bytes()[base.len() - svc.len() - 1], b'_' | b'-')
    })
}

fn container_status(container: &Value, now_unix: i64) -> ServiceStatus {
    let state = container
        .get("State")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_ascii_lowercase();
    let exit_code = container
        .get("ExitCode")
        .and_then(Value::as_i64)
        .unwrap_or_default();

    let status = match state.as_str() {
        "running" => ServiceState::Running,
        "exited" | "stopped" if exit_code != 0 => ServiceState::Error,
        "exited" | "stopped" | "created" | "configured" | "initialized" | "paused"
        | "stopping" => ServiceState::Stopped,
        "dead" | "restarting" => ServiceState::Error,
        _ => ServiceState::Unknown,
    };

    let container_id = container
        .get("Id")
        .or_else(|| container.get("ID"))
        .and_then(Value::as_str)
        .map(|id| id.chars().take(12).collect());

    let uptime = if status == ServiceState::Running {
        uptime_from(container, now_unix)
    } else {
        None
    };

    ServiceStatus {
        status,
        container_id,
        uptime,
    }
}

fn uptime_from(container: &Value, now_unix: i64) -> Option<String> {
    if let Some(started) = container.get("StartedAt").and_then(Value::as_i64)
        && started > 0
        && now_unix >= started
    {
        return Some(format_uptime(now_unix.abs_diff(started)));
    }
    container
        .get("Status")
        .and_then(Value::as_str)
        .and_then(|s| s.strip_prefix("Up "))
        .map(|s| s.trim_end_matches(" ago").trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Format uptime seconds as human-readable string.
///
/// Returns "Xh Ym" if hours > 0, otherwise "Xm".
#[must_use]
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
