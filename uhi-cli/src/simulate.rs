//! Simulate command implementation for the `uhi` CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use uhi_core::CoveragePercent;
use uhi_recommender::CatalogRecommender;

use crate::inputs::{HotspotSource, load_catalog};
use crate::output::write_json;
use crate::{
    ARG_CATALOG, ARG_COVERAGE, ARG_HOTSPOT_FILE, ARG_HOTSPOT_ID, ARG_KIND, CliError,
    ENV_SIMULATE_HOTSPOT_ID, ENV_SIMULATE_KIND,
};

/// CLI arguments for the `simulate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Project the cooling, cost and implementation timeline of \
                 deploying one intervention over part of a hotspot. Coverage \
                 is a percentage between 10 and 100 and defaults to 50.",
    about = "Simulate a partial rollout of one intervention"
)]
#[ortho_config(prefix = "UHI")]
pub(crate) struct SimulateArgs {
    /// Intervention kind, exactly as named in the catalogue.
    #[arg(long = ARG_KIND, value_name = "kind")]
    #[serde(default)]
    pub(crate) kind: Option<String>,
    /// Share of the hotspot to treat, in percent (10 to 100).
    #[arg(long = ARG_COVERAGE, value_name = "percent")]
    #[serde(default)]
    pub(crate) coverage: Option<u8>,
    /// Id of a reference hotspot (see `uhi hotspots`).
    #[arg(long = ARG_HOTSPOT_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) hotspot_id: Option<u32>,
    /// Path to a JSON-encoded hotspot.
    #[arg(long = ARG_HOTSPOT_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) hotspot_file: Option<Utf8PathBuf>,
    /// Path to a JSON array of intervention definitions.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl SimulateArgs {
    pub(crate) fn into_config(self) -> Result<SimulateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SimulateConfig::try_from(merged)
    }
}

/// Resolved `simulate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SimulateConfig {
    pub(crate) kind: String,
    pub(crate) coverage: CoveragePercent,
    pub(crate) hotspot: HotspotSource,
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl TryFrom<SimulateArgs> for SimulateConfig {
    type Error = CliError;

    fn try_from(args: SimulateArgs) -> Result<Self, Self::Error> {
        let kind = args.kind.ok_or(CliError::MissingArgument {
            field: ARG_KIND,
            env: ENV_SIMULATE_KIND,
        })?;
        let coverage = args
            .coverage
            .map(CoveragePercent::new)
            .transpose()?
            .unwrap_or_default();
        let hotspot =
            HotspotSource::resolve(args.hotspot_id, args.hotspot_file, ENV_SIMULATE_HOTSPOT_ID)?;
        Ok(Self {
            kind,
            coverage,
            hotspot,
            catalog: args.catalog,
        })
    }
}

pub(super) fn run_simulate_with(args: SimulateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_simulate(&config, writer)
}

pub(super) fn execute_simulate(
    config: &SimulateConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let hotspot = config.hotspot.load()?;
    let recommender = CatalogRecommender::new(load_catalog(config.catalog.as_deref())?);
    let simulation = recommender.simulate(&hotspot, &config.kind, config.coverage)?;
    write_json(writer, &simulation)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SimulateConfig, CliError> {
    let merged = SimulateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SimulateConfig::try_from(merged)
}
