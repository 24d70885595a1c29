//! End-to-end runs against the real root filesystem. Thresholds are chosen
//! so the outcome does not depend on how full the test machine is.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{diskreport_command, report_files};

#[test]
fn test_ok_run_writes_report_and_log() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    diskreport_command(&out)
        .arg("--path")
        .arg("/")
        .arg("--threshold")
        .arg("100")
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("Report written to"))
        .stdout(predicate::str::contains("Threshold: 100.0% | Usage: "))
        .stdout(predicate::str::contains("WARNING").not());

    let reports = report_files(&out);
    assert_eq!(reports.len(), 1);

    let report = fs::read_to_string(out.join(&reports[0])).unwrap();
    assert!(report.starts_with("SYSTEM REPORT\n==============\nGenerated: "));
    assert!(report.contains("\nDISK USAGE\n----------\nPath: /\n"));

    let log = fs::read_to_string(out.join("run.log")).unwrap();
    assert_eq!(log.lines().count(), 1);
    assert!(log.contains(" | path=/ | threshold=100.0 | usage="));
    assert!(log.trim_end().ends_with("status=OK"));
}

#[test]
fn test_warn_run_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    diskreport_command(dir.path())
        .arg("--threshold=-1")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("WARNING: Disk usage exceeds -1.0%"));

    let log = fs::read_to_string(dir.path().join("run.log")).unwrap();
    assert!(log.contains("status=WARN"));
}

#[test]
fn test_missing_path_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let missing = dir.path().join("no").join("such").join("path");

    diskreport_command(&out)
        .arg("--path")
        .arg(&missing)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No such file or directory"));

    assert!(!out.exists());
    assert!(report_files(&out).is_empty());
}

#[test]
fn test_repeated_runs_append_to_log() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("run.log");
    let earlier = "2000-01-01 00:00:00 | path=/ | threshold=80.0 | usage=1.0 | status=OK";
    fs::write(&log_path, format!("{}\n", earlier)).unwrap();

    for _ in 0..2 {
        diskreport_command(dir.path())
            .arg("--threshold")
            .arg("100")
            .assert()
            .success();
    }

    let log = fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], earlier);
}

#[test]
fn test_custom_log_file_name() {
    let dir = tempfile::tempdir().unwrap();

    diskreport_command(dir.path())
        .arg("--threshold")
        .arg("100")
        .arg("--log-file")
        .arg("disk-usage.log")
        .assert()
        .success();

    assert!(dir.path().join("disk-usage.log").exists());
    assert!(!dir.path().join("run.log").exists());
}
