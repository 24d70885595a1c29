use std::path::Path;

use crate::domain::DiskUsage;
use crate::error::ReportResult;

/// Port for querying filesystem usage
pub trait DiskUsageSource {
    /// Total, used and free bytes for the filesystem holding `path`, from a single query
    fn disk_usage(&self, path: &Path) -> ReportResult<DiskUsage>;
}
