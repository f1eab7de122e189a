//! Scan command E2E tests

use predicates::prelude::*;
use tempfile::TempDir;

use crate::{fixture, intscan};

#[test]
fn test_scan_text_output() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("scan")
        .arg(fixture("numbers.txt"))
        .assert()
        .success()
        .stdout("1:1\t1\n1:3\t2\n1:5\t3\n2:3\t40\n2:6\t500\n4:1\t6\n");
}

#[test]
fn test_scan_crlf_numbering() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("scan")
        .arg(fixture("crlf.txt"))
        .assert()
        .success()
        .stdout("1:1\t10\n1:4\t20\n2:1\t30\n");
}

#[test]
fn test_scan_stdin() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("scan")
        .write_stdin("7 8\n")
        .assert()
        .success()
        .stdout("1:1\t7\n1:3\t8\n");
}

#[test]
fn test_scan_stdin_dash() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .args(["scan", "-"])
        .write_stdin("  5")
        .assert()
        .success()
        .stdout("1:3\t5\n");
}

#[test]
fn test_scan_skips_byte_order_mark() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("scan")
        .write_stdin("\u{FEFF}1 2")
        .assert()
        .success()
        .stdout("1:1\t1\n1:3\t2\n");
}

#[test]
fn test_scan_empty_input() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("scan")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_scan_json_output() {
    let dir = TempDir::new().unwrap();
    let output = intscan(dir.path())
        .args(["scan", "--format", "json"])
        .write_stdin("007 1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "value": 7, "text": "007", "line": 1, "column": 1 },
            { "value": 1, "text": "1", "line": 1, "column": 5 }
        ])
    );
}

#[test]
fn test_scan_json_without_text() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .args(["scan", "--format", "json", "--no-text"])
        .write_stdin("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": null"));
}

#[test]
fn test_scan_unexpected_character() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("scan")
        .arg(fixture("bad_char.txt"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "error[E1001]: Unexpected character [x] at 2:4",
        ))
        .stderr(predicate::str::contains("  2 | 3 4x\n    |    ^ unexpected character"));
}

#[test]
fn test_scan_overflow() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .arg("scan")
        .arg(fixture("overflow.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Illegal number literal [9223372036854775808] at 2:20",
        ))
        .stderr(predicate::str::contains("9223372036854775807"));
}

#[test]
fn test_scan_unicode_digits() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .args(["scan", "--digits", "ascii"])
        .write_stdin("٣")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unexpected character [٣] at 1:1"));

    intscan(dir.path())
        .args(["scan", "--digits", "unicode"])
        .write_stdin("٣")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Illegal number literal [٣] at 1:2"));
}

#[test]
fn test_scan_missing_file() {
    let dir = TempDir::new().unwrap();
    intscan(dir.path())
        .args(["scan", "does-not-exist.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot read does-not-exist.txt"));
}
