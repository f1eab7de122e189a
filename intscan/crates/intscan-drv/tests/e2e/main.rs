//! End-to-End Tests for the intscan CLI
//!
//! These tests run the built binary against fixture files and stdin, with
//! the configuration search isolated to a temporary home directory.

mod check_tests;
mod cli_tests;
mod init_tests;
mod scan_tests;

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("e2e")
        .join("fixtures")
}

/// Get the path to a fixture file
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// An `intscan` command that runs in `dir` and cannot see user config.
pub fn intscan(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_intscan"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("INTSCAN_VERBOSE")
        .env_remove("INTSCAN_CONFIG")
        .env_remove("INTSCAN_NO_COLOR");
    cmd
}
