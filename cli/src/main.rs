//! rhdh-local CLI - manage a local Red Hat Developer Hub instance

use std::process::ExitCode;

use clap::Parser;
use rhdh_local::cli::Cli;
use rhdh_local::domain::{ConfigError, HubError};
use rhdh_local::output::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;

    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            report_error(&e, json_mode);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--json` stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn report_error(e: &anyhow::Error, json_mode: bool) {
    if !json_mode {
        eprintln!("Error: {e:#}");
        return;
    }
    let code = e
        .downcast_ref::<HubError>()
        .map(HubError::code)
        .or_else(|| e.downcast_ref::<ConfigError>().map(ConfigError::code))
        .unwrap_or("error");
    match json::format_error(&format!("{e:#}"), code) {
        Ok(body) => println!("{body}"),
        Err(_) => eprintln!("Error: {e:#}"),
    }
}
