//! Init command implementation.
//!
//! Writes a default `intscan.toml` into a directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::commands::traits::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{DrvError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Write the configuration file, returning its path.
    pub fn run(&self) -> Result<PathBuf> {
        let target = self.target_dir()?;
        Self::validate_directory(&target)?;

        let config_path = target.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(DrvError::Validation(format!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        info!(path = %config_path.display(), "created configuration");
        Ok(config_path)
    }

    fn target_dir(&self) -> Result<PathBuf> {
        match &self.args.path {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// A missing directory is fine and gets created; a file is not.
    fn validate_directory(path: &Path) -> Result<()> {
        if path.exists() && !path.is_dir() {
            return Err(DrvError::Validation(format!(
                "target is not a directory: {}",
                path.display()
            )));
        }
        Ok(())
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}
