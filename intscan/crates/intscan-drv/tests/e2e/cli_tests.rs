//! CLI Interface E2E Tests
//!
//! Help, version, usage errors and configuration handling.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::{fixture, intscan};

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("scan")));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("intscan"));
}

#[test]
fn test_cli_unknown_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path()).arg("frobnicate").assert().code(2);
}

#[test]
fn test_cli_missing_config_file() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .args(["--config", "missing.toml", "check"])
        .arg(fixture("numbers.txt"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_cli_config_from_current_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("intscan.toml"),
        "[output]\nformat = \"json\"\ncolor = false\n",
    )
    .unwrap();

    intscan(dir.path())
        .arg("scan")
        .arg(fixture("max.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": 9223372036854775807"));
}

#[test]
fn test_cli_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("intscan.toml"), "[output]\nformat = \"json\"\n").unwrap();

    intscan(dir.path())
        .args(["scan", "--format", "text"])
        .arg(fixture("max.txt"))
        .assert()
        .success()
        .stdout("1:1\t9223372036854775807\n");
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .args(["--verbose", "--no-color", "scan"])
        .arg(fixture("numbers.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:1\t1\n"))
        .stderr(predicate::str::contains("scanned line"));
}
