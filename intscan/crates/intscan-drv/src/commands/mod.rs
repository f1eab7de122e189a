//! Command modules for the intscan CLI.
//!
//! Each subcommand is implemented in its own file on top of the
//! [`traits::Command`] trait.

pub mod common;
pub mod traits;

pub mod check;
pub mod init;
pub mod scan;

pub use check::{CheckArgs, CheckCommand};
pub use init::{InitArgs, InitCommand};
pub use scan::{ScanArgs, ScanCommand};
pub use traits::run;
