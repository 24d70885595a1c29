use chrono::NaiveDateTime;

use crate::domain::{format_decimal, DiskUsage};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the fixed-layout text report
pub fn render_report(
    disk: &DiskUsage,
    timestamp: NaiveDateTime,
    host: &str,
    os_info: &str,
) -> String {
    let lines = [
        "SYSTEM REPORT".to_string(),
        "==============".to_string(),
        format!("Generated: {}", timestamp.format(TIMESTAMP_FORMAT)),
        format!("Host: {}", host),
        format!("OS: {}", os_info),
        String::new(),
        "DISK USAGE".to_string(),
        "----------".to_string(),
        format!("Path: {}", disk.path),
        format!("Total: {} GB", format_decimal(disk.total_gb())),
        format!(
            "Used:  {} GB ({}%)",
            format_decimal(disk.used_gb()),
            format_decimal(disk.used_percent())
        ),
        format!("Free:  {} GB", format_decimal(disk.free_gb())),
    ];
    lines.join("\n")
}
