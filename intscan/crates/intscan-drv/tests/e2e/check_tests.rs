//! Check command E2E tests

use predicates::prelude::*;
use tempfile::TempDir;

use crate::{fixture, intscan};

#[test]
fn test_check_valid_file() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("check")
        .arg(fixture("numbers.txt"))
        .assert()
        .success()
        .stdout("ok: 6 token(s)\n");
}

#[test]
fn test_check_whitespace_only() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("check")
        .write_stdin(" \t \n\n")
        .assert()
        .success()
        .stdout("ok: 0 token(s)\n");
}

#[test]
fn test_check_invalid_file() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("check")
        .arg(fixture("bad_char.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ok:").not())
        .stderr(predicate::str::contains("Unexpected character [x] at 2:4"));
}

#[test]
fn test_check_digits_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("intscan.toml"), "[scan]\ndigits = \"unicode\"\n").unwrap();

    intscan(dir.path())
        .arg("check")
        .write_stdin("1 ½")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Illegal number literal [½] at 1:4"));
}
