//! Spinners shown while git or podman-compose is busy.

#![allow(clippy::expect_used)] // templates below are literals

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const FRAMES: [&str; 11] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"];
const TICK: Duration = Duration::from_millis(80);

/// Start a spinner labelled `msg`. It ticks on its own until finished.
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .tick_strings(&FRAMES)
        .template("  {spinner:.cyan} {msg}")
        .expect("spinner template");
    let pb = ProgressBar::new_spinner().with_style(style);
    pb.set_message(msg.to_owned());
    pb.enable_steady_tick(TICK);
    pb
}

/// Replace the spinner with a green `✓` and `msg`.
pub fn finish_ok(pb: &ProgressBar, msg: &str) {
    settle(pb, "  {prefix:.green} {msg}", "✓", msg);
}

/// Replace the spinner with a red `✗` and `msg`.
pub fn finish_error(pb: &ProgressBar, msg: &str) {
    settle(pb, "  {prefix:.red} {msg}", "✗", msg);
}

fn settle(pb: &ProgressBar, template: &str, mark: &'static str, msg: &str) {
    let style = ProgressStyle::default_spinner()
        .template(template)
        .expect("finish template");
    pb.set_style(style);
    pb.set_prefix(mark);
    pb.finish_with_message(msg.to_owned());
}
