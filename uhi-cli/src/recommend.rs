//! Recommend command implementation for the `uhi` CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use uhi_core::{
    Budget, Hotspot, InterventionCatalog, PortfolioSummary, Recommendation, Recommender,
};
use uhi_recommender::{CatalogRecommender, implementation_timeline};

use crate::inputs::{HotspotSource, load_catalog};
use crate::output::write_json;
use crate::{
    ARG_BUDGET, ARG_CATALOG, ARG_HOTSPOT_FILE, ARG_HOTSPOT_ID, CliError,
    ENV_RECOMMEND_HOTSPOT_ID,
};

/// Number of top-ranked recommendations combined in the summary.
pub(crate) const SUMMARY_SIZE: usize = 3;

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank cooling interventions for one hotspot by cooling per \
                 unit of cost, optionally capped by a budget. The hotspot is \
                 either a reference hotspot picked by id or a JSON file; the \
                 catalogue defaults to the five reference interventions.",
    about = "Recommend interventions for a hotspot"
)]
#[ortho_config(prefix = "UHI")]
pub(crate) struct RecommendArgs {
    /// Id of a reference hotspot (see `uhi hotspots`).
    #[arg(long = ARG_HOTSPOT_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) hotspot_id: Option<u32>,
    /// Path to a JSON-encoded hotspot.
    #[arg(long = ARG_HOTSPOT_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) hotspot_file: Option<Utf8PathBuf>,
    /// Spending cap in currency units; omit for no limit.
    #[arg(long = ARG_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) budget: Option<u64>,
    /// Path to a JSON array of intervention definitions.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) hotspot: HotspotSource,
    pub(crate) budget: Option<Budget>,
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let hotspot =
            HotspotSource::resolve(args.hotspot_id, args.hotspot_file, ENV_RECOMMEND_HOTSPOT_ID)?;
        let budget = args.budget.map(Budget::new).transpose()?;
        Ok(Self {
            hotspot,
            budget,
            catalog: args.catalog,
        })
    }
}

/// Builds a recommender for the current invocation.
pub(super) trait RecommenderBuilder {
    fn build(&self, catalog: InterventionCatalog) -> Box<dyn Recommender>;
}

pub(super) struct DefaultRecommenderBuilder;

impl RecommenderBuilder for DefaultRecommenderBuilder {
    fn build(&self, catalog: InterventionCatalog) -> Box<dyn Recommender> {
        Box::new(CatalogRecommender::new(catalog))
    }
}

/// A recommendation annotated with its implementation timeline.
#[derive(Debug, Serialize)]
struct TimedRecommendation<'a> {
    #[serde(flatten)]
    recommendation: &'a Recommendation,
    timeline: &'static str,
}

#[derive(Debug, Serialize)]
struct RecommendReport<'a> {
    hotspot: &'a Hotspot,
    budget: Option<Budget>,
    recommendations: Vec<TimedRecommendation<'a>>,
    summary: PortfolioSummary,
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn RecommenderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_recommend(&config, builder, writer)
}

pub(super) fn execute_recommend(
    config: &RecommendConfig,
    builder: &dyn RecommenderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let hotspot = config.hotspot.load()?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    let recommender = builder.build(catalog);
    let ranked = recommender.recommend(&hotspot, config.budget);
    if ranked.is_empty() {
        log::info!("no intervention fits the budget for {}", hotspot.location());
    }

    let report = RecommendReport {
        hotspot: &hotspot,
        budget: config.budget,
        recommendations: ranked
            .iter()
            .map(|recommendation| TimedRecommendation {
                recommendation,
                timeline: implementation_timeline(&recommendation.kind),
            })
            .collect(),
        summary: ranked.summary(SUMMARY_SIZE),
    };
    write_json(writer, &report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
