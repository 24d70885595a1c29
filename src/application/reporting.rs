use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{DiskUsage, UsageStatus};
use crate::error::{ReportError, ReportResult};
use crate::ports::{Clock, DiskUsageSource, SystemSource};

use super::report::render_report;
use super::run_log::append_log;

/// Everything a completed run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub disk: DiskUsage,
    pub status: UsageStatus,
    pub threshold: f64,
    pub report_path: PathBuf,
    pub log_file: PathBuf,
}

/// Disk usage reporter
pub struct ReportService {
    disk_source: Box<dyn DiskUsageSource>,
    system_source: Box<dyn SystemSource>,
    clock: Box<dyn Clock>,
    config: Config,
}

impl ReportService {
    pub fn new(
        disk_source: Box<dyn DiskUsageSource>,
        system_source: Box<dyn SystemSource>,
        clock: Box<dyn Clock>,
        config: Config,
    ) -> Self {
        Self {
            disk_source,
            system_source,
            clock,
            config,
        }
    }

    /// Take a single usage snapshot for `path`
    pub fn query(&self, path: &Path) -> ReportResult<DiskUsage> {
        self.disk_source.disk_usage(path)
    }

    pub fn evaluate(&self, disk: &DiskUsage, threshold: f64) -> UsageStatus {
        UsageStatus::evaluate(disk, threshold)
    }

    /// Query, then write the report and append the run log.
    ///
    /// Nothing touches the filesystem until the query succeeds. A failure
    /// after that may leave the report written without its log entry.
    pub fn run(&self) -> ReportResult<RunOutcome> {
        let threshold = self.config.threshold;
        let disk = self.query(&self.config.path)?;
        let status = self.evaluate(&disk, threshold);
        debug!(
            usage = disk.used_percent(),
            threshold,
            %status,
            "Evaluated disk usage"
        );

        let now = self.clock.now();
        let host = self.system_source.host_info();

        let out_dir = &self.config.out_dir;
        fs::create_dir_all(out_dir).map_err(|source| ReportError::CreateDir {
            path: out_dir.clone(),
            source,
        })?;

        let report_path = self.config.report_path(now);
        let report = render_report(&disk, now, &host.hostname, &host.os_info);
        fs::write(&report_path, report).map_err(|source| ReportError::WriteReport {
            path: report_path.clone(),
            source,
        })?;
        info!("Report written to {}", report_path.display());

        append_log(
            &self.config.log_file,
            now,
            &disk.path,
            threshold,
            disk.used_percent(),
            status,
        )?;
        debug!("Appended run log entry to {}", self.config.log_file.display());

        Ok(RunOutcome {
            disk,
            status,
            threshold,
            report_path,
            log_file: self.config.log_file.clone(),
        })
    }
}
