//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{diskmon_command, no_cfg_diskmon_command};

#[test]
fn test_help() {
    diskmon_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disk I/O Options"))
        .stdout(predicate::str::contains("--hide_zero"));
}

#[test]
fn test_version() {
    diskmon_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_small_rate() {
    no_cfg_diskmon_command()
        .arg("-r")
        .arg("249")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 250 ms"));
}

#[test]
fn test_invalid_rate() {
    no_cfg_diskmon_command()
        .arg("-r")
        .arg("100-1000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--rate' was set with an invalid value"));
}

#[test]
fn test_invalid_count() {
    no_cfg_diskmon_command()
        .arg("-n")
        .arg("forever")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'forever'"));
}

#[test]
fn test_unknown_arg() {
    no_cfg_diskmon_command()
        .arg("--basic")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
