//! Command implementations for the motorlog analyzer CLI
//!
//! Each command is implemented in its own module; shared helpers (logging
//! setup, channel map loading) live in [`shared`].

pub mod analyze;
pub mod inspect;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the motorlog analyzer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `analyze`: full analysis with JSON output
/// - `inspect`: export file examination without a full analysis
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Some(Commands::Analyze(analyze_args)) => analyze::run_analyze(analyze_args),
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args),
        None => Ok(()),
    }
}
