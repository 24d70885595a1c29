//! These tests are mostly here just to ensure that invalid arguments are
//! rejected before anything is measured or written.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::diskreport_command;

#[test]
fn test_non_numeric_threshold() {
    let dir = tempfile::tempdir().unwrap();
    diskreport_command(dir.path())
        .arg("--threshold")
        .arg("eighty")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("is not a number"));
}

#[test]
fn test_nan_threshold() {
    let dir = tempfile::tempdir().unwrap();
    diskreport_command(dir.path())
        .arg("--threshold")
        .arg("NaN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a finite number"));
}

#[test]
fn test_unknown_flag() {
    let dir = tempfile::tempdir().unwrap();
    diskreport_command(dir.path())
        .arg("--paths")
        .arg("/")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    diskreport_command(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
