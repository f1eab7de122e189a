//! intscan CLI - Scan text for integer literals.
//!
//! This is the main entry point for the intscan command-line tool.
//! It uses clap for argument parsing, loads `intscan.toml`, and
//! dispatches to the command handlers.

mod commands;
mod config;
mod error;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use intscan_lex::ScanOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{DigitMode, OutputFormat};
use commands::{run, CheckArgs, CheckCommand, InitArgs, InitCommand, ScanArgs, ScanCommand};
use config::Config;
use error::{DrvError, Result};

/// intscan - Scan text for integer literals
///
/// Reads text made of decimal digit runs separated by whitespace and
/// reports each literal with its line and column, or the first character
/// that does not belong.
#[derive(Parser, Debug)]
#[command(name = "intscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan text for integer literals", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "INTSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "INTSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "INTSCAN_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the intscan CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the integer tokens of the input
    ///
    /// Reads FILE, or stdin when FILE is omitted or "-".
    Scan(ScanCommandArgs),

    /// Validate the input without printing tokens
    Check(CheckCommandArgs),

    /// Write a default intscan.toml
    Init(InitCommandArgs),
}

/// Arguments for the scan subcommand.
#[derive(Parser, Debug)]
struct ScanCommandArgs {
    /// Input file (default: stdin)
    file: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Digit classification (default: from config)
    #[arg(short, long, value_enum)]
    digits: Option<DigitMode>,

    /// Don't keep literal text on tokens
    #[arg(long)]
    no_text: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Input file (default: stdin)
    file: Option<PathBuf>,

    /// Digit classification (default: from config)
    #[arg(short, long, value_enum)]
    digits: Option<DigitMode>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommandArgs {
    /// Directory to write into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing intscan.toml
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the intscan CLI.
///
/// Exit codes: 0 on success, 1 when the scanner rejects the input, 2 for
/// configuration, IO and usage failures.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Scan errors were already rendered with their source snippet.
            if !matches!(err, DrvError::Scan(_)) {
                eprintln!("error: {}", err);
            }
            ExitCode::from(err.exit_code())
        },
    }
}

fn try_main(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(
        cli.verbose || config.verbose,
        cli.no_color || !config.output.color,
    )?;

    execute_command(cli.command, &config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Logs go to stderr
/// so stdout carries only command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Resolve scanner options: command-line flags win over configuration.
fn scan_options(config: &Config, digits: Option<DigitMode>, no_text: bool) -> ScanOptions {
    ScanOptions {
        digits: digits.unwrap_or(config.scan.digits).into(),
        retain_text: config.scan.retain_text && !no_text,
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Scan(args) => {
            run::<ScanCommand>(ScanArgs {
                options: scan_options(config, args.digits, args.no_text),
                format: args.format.unwrap_or(config.output.format),
                input: args.file,
            })?;
        },
        Commands::Check(args) => {
            run::<CheckCommand>(CheckArgs {
                options: scan_options(config, args.digits, false),
                input: args.file,
            })?;
        },
        Commands::Init(args) => {
            let path = run::<InitCommand>(InitArgs {
                path: args.path,
                force: args.force,
            })?;
            println!("created {}", path.display());
        },
    }
    Ok(())
}
