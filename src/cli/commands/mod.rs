//! Command implementations for the CAN-to-Savvy CLI
//!
//! Each command is implemented in its own module:
//! - `convert`: convert logger exports to `.svy` files
//! - `formats`: list the supported source formats

pub mod convert;
pub mod formats;
pub mod shared;

pub use shared::ConvertStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Returns `None` for commands that convert nothing.
pub async fn run(args: Args) -> Result<Option<ConvertStats>> {
    match args.command {
        Some(Commands::Convert(convert_args)) => {
            convert::run_convert(convert_args).await.map(Some)
        }
        Some(Commands::Formats) | None => formats::run_formats().map(|_| None),
    }
}
