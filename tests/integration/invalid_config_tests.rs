//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::diskmon_command;

#[test]
fn test_toml_mismatch_type() {
    diskmon_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_unknown_field() {
    diskmon_command(&["-C", "./tests/invalid_configs/unknown_field.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn test_invalid_regex() {
    diskmon_command(&["-C", "./tests/invalid_configs/invalid_regex.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern 'sd[a-'"));
}

#[test]
fn test_empty_pattern() {
    diskmon_command(&["-C", "./tests/invalid_configs/empty_pattern.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty pattern"));
}

#[test]
fn test_negative_threshold() {
    diskmon_command(&["-C", "./tests/invalid_configs/negative_threshold.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'hide_threshold_bytes' was set with an invalid value"));
}

#[test]
fn test_small_rate_in_config() {
    diskmon_command(&["-C", "./tests/invalid_configs/small_rate.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 250 ms"));
}

/// Duplicate keys are rejected by the TOML parser itself.
#[test]
fn test_duplicate_alias() {
    diskmon_command(&["-C", "./tests/invalid_configs/duplicate_alias.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}
