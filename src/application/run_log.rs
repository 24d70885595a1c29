use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::domain::{format_decimal, UsageStatus};
use crate::error::{ReportError, ReportResult};

use super::report::TIMESTAMP_FORMAT;

/// Escape characters that would split a log entry or forge a field
fn escape_field(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '|' => escaped.push_str("\\|"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c if c.is_control() => escaped.extend(c.escape_default()),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Format one pipe-delimited run log entry, without the newline
pub fn log_line(
    timestamp: NaiveDateTime,
    path: &str,
    threshold: f64,
    usage_percent: f64,
    status: UsageStatus,
) -> String {
    format!(
        "{} | path={} | threshold={} | usage={} | status={}",
        timestamp.format(TIMESTAMP_FORMAT),
        escape_field(path),
        format_decimal(threshold),
        format_decimal(usage_percent),
        status
    )
}

/// Append one entry to `logfile`, creating it (and its directory) if absent
pub fn append_log(
    logfile: &Path,
    timestamp: NaiveDateTime,
    path: &str,
    threshold: f64,
    usage_percent: f64,
    status: UsageStatus,
) -> ReportResult<()> {
    let append_err = |source: std::io::Error| ReportError::AppendLog {
        path: logfile.to_path_buf(),
        source,
    };

    if let Some(parent) = logfile.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(append_err)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(logfile)
        .map_err(append_err)?;

    let line = log_line(timestamp, path, threshold, usage_percent, status);
    writeln!(file, "{}", line).map_err(append_err)
}
