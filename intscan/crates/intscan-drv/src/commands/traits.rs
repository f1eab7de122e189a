//! Command trait for the intscan CLI.
//!
//! Every subcommand is a type built from its arguments and executed once.

use tracing::debug;

use crate::error::Result;

/// Standard command trait that all intscan commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Build and execute command `C`.
pub fn run<C: Command>(args: C::Args) -> Result<C::Output> {
    debug!(command = C::name(), "executing command");
    C::new(args).execute()
}
