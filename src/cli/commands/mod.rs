//! Command implementations for the cable processor CLI
//!
//! Each command lives in its own module; this module dispatches on the
//! parsed arguments.

pub mod convert;
pub mod validate;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the requested subcommand
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Convert(convert_args) => convert::run_convert(convert_args),
        Commands::Validate(validate_args) => validate::run_validate(validate_args),
    }
}
