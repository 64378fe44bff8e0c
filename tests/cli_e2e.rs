//! End-to-end CLI tests for the netload binary.
//!
//! These exercise only paths that need no network: flag parsing, the
//! missing-URL no-op, and failures detected before any connection attempt.

use assert_cmd::Command;
use predicates::prelude::*;

/// No URL is a no-op, not a failure.
#[test]
fn test_binary_without_url_exits_zero() {
    let mut cmd = Command::cargo_bin("netload").unwrap();
    cmd.assert().success();
}

/// --help displays usage and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("netload").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetch a single file"));
}

/// --version displays the version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("netload").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("netload"));
}

/// Invalid flags cause a non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("netload").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// A non-http(s) scheme is rejected before any connection attempt.
#[test]
fn test_binary_unsupported_scheme_exits_nonzero() {
    let mut cmd = Command::cargo_bin("netload").unwrap();
    cmd.arg("ftp://example.com/file.bin")
        .assert()
        .failure()
        .stdout(predicate::str::contains("unsupported URL scheme"));
}

/// A zero timeout is rejected by argument validation.
#[test]
fn test_binary_timeout_zero_rejected() {
    let mut cmd = Command::cargo_bin("netload").unwrap();
    cmd.args(["example.com", "-t", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

/// -v and -q are accepted alongside the no-op path.
#[test]
fn test_binary_verbosity_flags_accepted() {
    let mut cmd = Command::cargo_bin("netload").unwrap();
    cmd.arg("-v").assert().success();

    let mut cmd = Command::cargo_bin("netload").unwrap();
    cmd.arg("-q").assert().success();
}
