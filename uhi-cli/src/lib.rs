//! Command-line interface for the urban heat island intervention engine.
//!
//! Every command prints pretty JSON to standard output. Options can come from
//! CLI flags, configuration files, or `UHI_`-prefixed environment variables.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod inputs;
mod listing;
mod output;
mod recommend;
mod simulate;

pub use error::CliError;

use listing::{HotspotsArgs, run_budgets_with, run_hotspots_with};
use recommend::{DefaultRecommenderBuilder, RecommendArgs, run_recommend_with};
use simulate::{SimulateArgs, run_simulate_with};

pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ARG_HOTSPOT_ID: &str = "hotspot-id";
pub(crate) const ARG_HOTSPOT_FILE: &str = "hotspot-file";
pub(crate) const ARG_BUDGET: &str = "budget";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_KIND: &str = "kind";
pub(crate) const ARG_COVERAGE: &str = "coverage";
pub(crate) const ENV_RECOMMEND_HOTSPOT_ID: &str = "UHI_CMDS_RECOMMEND_HOTSPOT_ID";
pub(crate) const ENV_SIMULATE_HOTSPOT_ID: &str = "UHI_CMDS_SIMULATE_HOTSPOT_ID";
pub(crate) const ENV_SIMULATE_KIND: &str = "UHI_CMDS_SIMULATE_KIND";

/// Run the `uhi` CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, inputs
/// cannot be loaded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Hotspots(args) => run_hotspots_with(args, writer),
        Command::Budgets => run_budgets_with(writer),
        Command::Recommend(args) => run_recommend_with(args, &DefaultRecommenderBuilder, writer),
        Command::Simulate(args) => run_simulate_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "uhi",
    about = "Plan cooling interventions for urban heat island hotspots",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the reference hotspots, optionally narrowed to a heat band.
    Hotspots(HotspotsArgs),
    /// List the preset budget choices.
    Budgets,
    /// Rank interventions for a hotspot within an optional budget.
    Recommend(RecommendArgs),
    /// Project the effect of treating part of a hotspot.
    Simulate(SimulateArgs),
}

#[cfg(test)]
mod tests;
