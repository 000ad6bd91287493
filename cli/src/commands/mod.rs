//! Command implementations

pub mod clone;
pub mod config;
pub mod doctor;
pub mod lifecycle;
pub mod logs;
pub mod open;
pub mod plugins;
pub mod repo;
pub mod settings;
pub mod setup;
pub mod status;
pub mod version;

use std::future::Future;

use anyhow::Result;

use crate::app::AppContext;
use crate::output::progress;

/// Await `fut` behind a spinner when progress output is enabled.
///
/// The spinner is cleared either way; callers render the result.
pub async fn with_spinner<T>(app: &AppContext, msg: &str, fut: impl Future<Output = Result<T>>) -> Result<T> {
    if !app.output.show_progress() {
        return fut.await;
    }
    let pb = progress::spinner(msg);
    let result = fut.await;
    pb.finish_and_clear();
    result
}
