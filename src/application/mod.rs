pub mod report;
pub mod reporting;
pub mod run_log;

pub use reporting::{ReportService, RunOutcome};
