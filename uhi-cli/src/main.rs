//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use uhi_cli::CliError;

fn main() -> eyre::Result<()> {
    match uhi_cli::run() {
        Ok(()) => Ok(()),
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => Err(eyre::Report::new(err)),
    }
}
