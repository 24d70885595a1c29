use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::interface::Cli;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub threshold: f64,
    pub out_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let log_file = resolve_log_file(&cli.out_dir, &cli.log_file);
        Self {
            path: cli.path,
            threshold: cli.threshold,
            out_dir: cli.out_dir,
            log_file,
            log_level: if cli.verbose { "debug" } else { "warn" }.to_string(),
        }
    }

    /// Report file for a run started at `timestamp`
    pub fn report_path(&self, timestamp: NaiveDateTime) -> PathBuf {
        self.out_dir.join(format!(
            "system_report_{}.txt",
            timestamp.format("%Y%m%d_%H%M%S")
        ))
    }
}

impl Default for Config {
    fn default() -> Self {
        let out_dir = PathBuf::from("out");
        Self {
            path: PathBuf::from("/"),
            threshold: 80.0,
            log_file: out_dir.join("run.log"),
            out_dir,
            log_level: "warn".to_string(),
        }
    }
}

/// Relative log names live inside the output directory
fn resolve_log_file(out_dir: &Path, log_file: &Path) -> PathBuf {
    if log_file.is_absolute() {
        log_file.to_path_buf()
    } else {
        out_dir.join(log_file)
    }
}
