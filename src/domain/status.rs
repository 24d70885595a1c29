use std::fmt;

use super::DiskUsage;

/// Outcome of comparing disk usage to the warning threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageStatus {
    Ok,
    Warn,
}

impl UsageStatus {
    /// `Warn` only when usage is strictly above the threshold.
    pub fn evaluate(disk: &DiskUsage, threshold: f64) -> Self {
        if disk.used_percent() > threshold {
            UsageStatus::Warn
        } else {
            UsageStatus::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UsageStatus::Ok => "OK",
            UsageStatus::Warn => "WARN",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            UsageStatus::Ok => 0,
            UsageStatus::Warn => 1,
        }
    }

    pub fn is_warn(&self) -> bool {
        matches!(self, UsageStatus::Warn)
    }
}

impl fmt::Display for UsageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
