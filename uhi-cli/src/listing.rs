//! The `hotspots` and `budgets` listing commands.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use uhi_core::{Budget, HeatCategory, Hotspot, filter_by_category, sample_hotspots};

use crate::output::write_json;
use crate::{ARG_CATEGORY, CliError};

/// CLI arguments for the `hotspots` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List the reference Faisalabad hotspots with their heat band. \
                 When the requested band holds no hotspot the full list is \
                 printed instead.",
    about = "List the reference hotspots"
)]
#[ortho_config(prefix = "UHI")]
pub(crate) struct HotspotsArgs {
    /// Only list hotspots in this band: extreme, high or moderate.
    #[arg(long = ARG_CATEGORY, value_name = "band")]
    #[serde(default)]
    pub(crate) category: Option<HeatCategory>,
}

#[derive(Debug, Serialize)]
struct HotspotEntry<'a> {
    #[serde(flatten)]
    hotspot: &'a Hotspot,
    category: Option<HeatCategory>,
}

/// One selectable spending cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct BudgetOption {
    pub(crate) label: String,
    pub(crate) amount: Option<u64>,
}

pub(super) fn run_hotspots_with(
    args: HotspotsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    write_hotspots(writer, merged.category)
}

pub(super) fn write_hotspots(
    writer: &mut dyn Write,
    category: Option<HeatCategory>,
) -> Result<(), CliError> {
    let hotspots = sample_hotspots();
    let entries: Vec<HotspotEntry<'_>> = filter_by_category(&hotspots, category)
        .into_iter()
        .map(|hotspot| HotspotEntry {
            hotspot,
            category: hotspot.category(),
        })
        .collect();
    write_json(writer, &entries)
}

pub(super) fn run_budgets_with(writer: &mut dyn Write) -> Result<(), CliError> {
    write_json(writer, &budget_options())
}

/// "No limit" followed by each preset, smallest first.
pub(crate) fn budget_options() -> Vec<BudgetOption> {
    let unlimited = BudgetOption {
        label: "No limit".to_owned(),
        amount: None,
    };
    std::iter::once(unlimited)
        .chain(Budget::presets().into_iter().map(|budget| BudgetOption {
            label: group_thousands(budget.amount()),
            amount: Some(budget.amount()),
        }))
        .collect()
}

/// Format `amount` with comma thousands separators.
pub(crate) fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
