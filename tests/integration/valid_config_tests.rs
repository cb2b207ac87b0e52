//! These tests are for testing some valid config files. They actually sample
//! disks, so they only run on Linux.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{diskmon_command, no_cfg_diskmon_command};

#[test]
fn test_empty_config() {
    no_cfg_diskmon_command()
        .args(["-n", "1", "-r", "250"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("DISK"));
}

#[test]
fn test_all_settings() {
    diskmon_command(&["-C", "./tests/valid_configs/all_settings.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("READ"))
        .stdout(predicate::str::contains("(IOPS)"))
        .stdout(predicate::str::contains("loop").not());
}

#[test]
fn test_hide_everything() {
    diskmon_command(&["-C", "./tests/valid_configs/hide_everything.toml"])
        .assert()
        .success()
        .stdout(predicate::str::diff("DISK       READ      WRITE\n"));
}

#[test]
fn test_creates_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new").join("diskmon.toml");
    let path = path.to_str().unwrap();

    diskmon_command(&["-C", path, "-n", "1", "-r", "250"])
        .assert()
        .success();

    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.contains("[diskio]"));
}
