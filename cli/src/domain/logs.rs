//! Log text helpers.

/// Keep only the last `lines` lines of `text`.
///
/// `None` returns the text unchanged. A trailing newline on the input is
/// preserved and does not count as an extra line.
#[must_use]
pub fn tail_lines(text: &str, lines: Option<usize>) -> String {
    let Some(n) = lines else {
        return text.to_string();
    };
    if n == 0 {
        return String::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    let start = body
        .rmatch_indices('\n')
        .nth(n - 1)
        .map_or(0, |(idx, _)| idx + 1);
    text[start..].to_string()
}

/// Merge captured stdout and stderr into one log body.
///
/// `podman logs` replays container stderr on its own stderr, so both streams
/// carry log lines.
#[must_use]
pub fn merge_streams(stdout: &[u8], stderr: &[u8]) -> String {
    let out = String::from_utf8_lossy(stdout);
    let err = String::from_utf8_lossy(stderr);
    match (out.is_empty(), err.is_empty()) {
        (_, true) => out.into_owned(),
        (true, false) => err.into_owned(),
        (false, false) => {
            let mut merged = out.into_owned();
            if !merged.ends_with('\n') {
                merged.push('\n');
            }
            merged.push_str(&err);
            merged
        }
    }
}

/// Section header written before each service in an exported log bundle.
#[must_use]
pub fn export_section_header(service: &str) -> String {
    format!("===== {service} =====\n")
}
