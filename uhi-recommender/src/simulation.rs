//! What-if simulation of a partial rollout.
//!
//! Unlike the recommender, the simulator scales cooling linearly with the
//! chosen coverage and applies neither the 3 °C cap nor the cost-per-person
//! calibration.

use serde::{Deserialize, Serialize};
use uhi_core::rounding::{round_to, truncate};
use uhi_core::{CoveragePercent, Hotspot, InterventionDefinition, InterventionUnit};

use crate::scoring::{MIN_COOLING_DENOMINATOR_C, TREE_FOOTPRINT_M2, as_float};
use crate::timeline::implementation_timeline;

/// Smallest cost, in thousands, used when normalising cooling efficiency.
const MIN_COST_THOUSANDS: f64 = 0.1;

/// Projected effect of deploying one intervention over part of a hotspot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSimulation {
    /// Intervention kind that was simulated.
    pub kind: String,
    /// Share of the hotspot treated, in percent.
    pub coverage_percent: u8,
    /// Deployment unit of the intervention.
    pub unit: InterventionUnit,
    /// Trees planted or square metres treated.
    pub units_required: u64,
    /// Temperature reduction in °C, rounded to 2 decimals.
    pub estimated_cooling: f64,
    /// Cost in whole currency units.
    pub estimated_cost: u64,
    /// Currency spent per °C of cooling.
    pub cost_per_degree: u64,
    /// Currency spent per exposed person.
    pub cost_per_person: u64,
    /// Population exposed in the hotspot.
    pub pop_benefit: u64,
    /// Observed temperature, when the hotspot carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_before: Option<f64>,
    /// Projected temperature after deployment, rounded to 1 decimal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_after: Option<f64>,
    /// Cooling per 1,000 currency units, rounded to 3 decimals.
    pub cooling_efficiency: f64,
    /// Indicative implementation timeline.
    pub timeline: String,
}

/// Simulate deploying `definition` over `coverage` percent of `hotspot`.
///
/// # Examples
/// ```
/// use uhi_core::{CoveragePercent, Hotspot, InterventionCatalog};
/// use uhi_recommender::simulate_impact;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let hotspot = Hotspot::new(2.5, 1_500)?.with_temperature(42.5)?;
/// let catalog = InterventionCatalog::default();
/// let trees = catalog.get("Street Trees").ok_or("missing trees")?;
/// let simulation = simulate_impact(&hotspot, trees, CoveragePercent::new(50)?);
/// assert_eq!(simulation.units_required, 250);
/// assert_eq!(simulation.estimated_cost, 100_000);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the simulation scales floating-point estimates by coverage"
)]
pub fn simulate_impact(
    hotspot: &Hotspot,
    definition: &InterventionDefinition,
    coverage: CoveragePercent,
) -> ImpactSimulation {
    let fraction = coverage.fraction();
    let area_m2 = hotspot.area_m2();
    let cooling = definition.unit_cooling() * fraction;

    let (units, cost) = match definition.unit() {
        InterventionUnit::Tree => {
            let trees = (area_m2 / TREE_FOOTPRINT_M2 * fraction).floor();
            (trees, trees * definition.unit_cost())
        }
        InterventionUnit::Area => {
            let covered = area_m2 * fraction;
            (covered.floor(), covered * definition.unit_cost())
        }
    };

    let population = as_float(hotspot.pop_exposed()).max(1.0);
    let temperature_after = hotspot
        .temperature_c()
        .map(|before| round_to(before - cooling, 1));

    ImpactSimulation {
        kind: definition.kind().to_owned(),
        coverage_percent: coverage.percent(),
        unit: definition.unit(),
        units_required: truncate(units),
        estimated_cooling: round_to(cooling, 2),
        estimated_cost: truncate(cost),
        cost_per_degree: truncate(cost / cooling.max(MIN_COOLING_DENOMINATOR_C)),
        cost_per_person: truncate(cost / population),
        pop_benefit: hotspot.pop_exposed(),
        temperature_before: hotspot.temperature_c(),
        temperature_after,
        cooling_efficiency: round_to(cooling / (cost / 1_000.0).max(MIN_COST_THOUSANDS), 3),
        timeline: implementation_timeline(definition.kind()).to_owned(),
    }
}
