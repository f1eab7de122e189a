//! Init command E2E tests

use predicates::prelude::*;
use tempfile::TempDir;

use crate::intscan;

#[test]
fn test_init_current_dir() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("intscan.toml"));

    let written = std::fs::read_to_string(dir.path().join("intscan.toml")).unwrap();
    assert!(written.contains("[scan]"));
    assert!(written.contains("digits = \"ascii\""));
    assert!(written.contains("[output]"));
    assert!(written.contains("format = \"text\""));
}

#[test]
fn test_init_then_scan_uses_config() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path()).arg("init").assert().success();
    intscan(dir.path())
        .arg("scan")
        .write_stdin("12")
        .assert()
        .success()
        .stdout("1:1\t12\n");
}

#[test]
fn test_init_existing_requires_force() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("project");

    intscan(dir.path())
        .args(["init", "--path"])
        .arg(&project)
        .assert()
        .success();

    intscan(dir.path())
        .args(["init", "--path"])
        .arg(&project)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    intscan(dir.path())
        .args(["init", "--force", "--path"])
        .arg(&project)
        .assert()
        .success();
}
