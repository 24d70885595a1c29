const BYTES_PER_GB: f64 = 1_073_741_824.0;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a byte count to gibibytes, rounded to two decimals.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_GB)
}

/// Shortest decimal form of `value`, always with a fractional part
/// (`85.0`, `33.33`, `-1.0`).
pub fn format_decimal(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Disk usage snapshot for a single path
///
/// All three byte counts come from one OS query. `used + free` may be less
/// than `total` because of reserved blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskUsage {
    pub path: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
}

impl DiskUsage {
    pub fn new(path: impl Into<String>, total_bytes: u64, used_bytes: u64, free_bytes: u64) -> Self {
        Self {
            path: path.into(),
            total_bytes,
            used_bytes,
            free_bytes,
        }
    }

    pub fn total_gb(&self) -> f64 {
        bytes_to_gb(self.total_bytes)
    }

    pub fn used_gb(&self) -> f64 {
        bytes_to_gb(self.used_bytes)
    }

    pub fn free_gb(&self) -> f64 {
        bytes_to_gb(self.free_bytes)
    }

    /// Percentage of `total_bytes` in use, rounded to two decimals.
    ///
    /// Not clamped: an overcommitted filesystem can report more than 100.
    pub fn used_percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        round2((self.used_bytes as f64 / self.total_bytes as f64) * 100.0)
    }
}
