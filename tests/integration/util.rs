use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;

/// A `diskreport` command isolated from the caller's environment, writing into `out_dir`.
pub fn diskreport_command(out_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("diskreport").unwrap();
    cmd.env_remove("DISKREPORT_OUT_DIR")
        .env_remove("RUST_LOG")
        .arg("--out-dir")
        .arg(out_dir);
    cmd
}

/// Names of the report files currently in `out_dir`.
pub fn report_files(out_dir: &Path) -> Vec<String> {
    match std::fs::read_dir(out_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|name| name.starts_with("system_report_") && name.ends_with(".txt"))
            .collect(),
        Err(_) => Vec::new(),
    }
}
