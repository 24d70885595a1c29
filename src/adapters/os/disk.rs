use std::path::Path;

use nix::sys::statvfs::{statvfs, Statvfs};
use tracing::debug;

use crate::domain::DiskUsage;
use crate::error::{ReportError, ReportResult};
use crate::ports::DiskUsageSource;

/// Disk usage source backed by statvfs(3)
#[derive(Debug, Clone, Default)]
pub struct StatvfsDiskSource;

impl StatvfsDiskSource {
    pub fn new() -> Self {
        Self
    }

    /// Total from all blocks, free from blocks available to unprivileged
    /// users, used from blocks not free. Reserved blocks make up the gap.
    fn usage_from_stat(path: &Path, stat: &Statvfs) -> DiskUsage {
        let fragment_size = stat.fragment_size() as u64;
        let blocks = stat.blocks() as u64;
        let total_bytes = blocks.saturating_mul(fragment_size);
        let free_bytes = (stat.blocks_available() as u64).saturating_mul(fragment_size);
        let used_bytes = blocks
            .saturating_sub(stat.blocks_free() as u64)
            .saturating_mul(fragment_size);

        DiskUsage::new(
            path.display().to_string(),
            total_bytes,
            used_bytes,
            free_bytes,
        )
    }
}

impl DiskUsageSource for StatvfsDiskSource {
    fn disk_usage(&self, path: &Path) -> ReportResult<DiskUsage> {
        let stat = statvfs(path)
            .map_err(|errno| ReportError::from_query(path.display().to_string(), errno))?;
        let usage = Self::usage_from_stat(path, &stat);

        debug!(
            path = %usage.path,
            total = usage.total_bytes,
            used = usage.used_bytes,
            free = usage.free_bytes,
            "statvfs"
        );

        Ok(usage)
    }
}
