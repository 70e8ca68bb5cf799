//! Per-intervention cost and cooling estimates.
//!
//! Each catalogue entry is estimated independently of the others. The
//! constants below are calibration values. The 100,000 efficiency threshold
//! and the halving of cost per person in particular have no physical
//! derivation.
#![forbid(unsafe_code)]

use uhi_core::rounding::{round_to, truncate};
use uhi_core::{
    Budget, EfficiencyUnit, Hotspot, InterventionDefinition, InterventionUnit, Recommendation,
};

/// Ground area shaded by a single tree, in square metres.
pub const TREE_FOOTPRINT_M2: f64 = 50.0;

/// Share of a hotspot assumed to carry green roofs.
pub const GREEN_ROOF_COVERAGE: f64 = 0.3;

/// Share of a hotspot treated by every other area-based intervention.
pub const DEFAULT_AREA_COVERAGE: f64 = 0.5;

/// Treated area, in square metres, to which `unit_cooling` refers for
/// area-based interventions.
pub const AREA_COOLING_REFERENCE_M2: f64 = 1_000.0;

/// Largest cooling any single intervention may claim, in °C.
pub const MAX_COOLING_C: f64 = 3.0;

/// Floor for the cooling denominator of cost per degree, in °C.
pub const MIN_COOLING_DENOMINATOR_C: f64 = 0.1;

/// Total cost at which efficiency switches to per-100,000 units.
pub const LARGE_COST_THRESHOLD: f64 = 100_000.0;

/// Divisor applied to cost per person.
pub const COST_PER_PERSON_CALIBRATION: f64 = 2.0;

const GREEN_ROOF_KIND: &str = "Green Roof";

/// Unrounded estimate for one intervention over one hotspot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Estimate {
    pub(crate) unit_count: f64,
    pub(crate) coverage_area: f64,
    pub(crate) total_cost: f64,
    pub(crate) cooling: f64,
    pub(crate) cost_per_degree: f64,
    pub(crate) cost_per_person: f64,
    pub(crate) efficiency: f64,
    pub(crate) efficiency_unit: EfficiencyUnit,
}

/// Fraction of the hotspot an area-based intervention of `kind` covers.
#[must_use]
pub fn area_coverage_fraction(kind: &str) -> f64 {
    if kind == GREEN_ROOF_KIND {
        GREEN_ROOF_COVERAGE
    } else {
        DEFAULT_AREA_COVERAGE
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the estimate is a chain of floating-point formulas"
)]
pub(crate) fn estimate(definition: &InterventionDefinition, hotspot: &Hotspot) -> Estimate {
    let area_m2 = hotspot.area_m2();
    let (unit_count, coverage_area) = match definition.unit() {
        InterventionUnit::Tree => {
            let trees = (area_m2 / TREE_FOOTPRINT_M2).floor().max(1.0);
            (trees, trees * TREE_FOOTPRINT_M2)
        }
        InterventionUnit::Area => {
            let fraction = area_coverage_fraction(definition.kind());
            let square_metres = (area_m2 * fraction).floor();
            (square_metres, square_metres)
        }
    };
    let total_cost = unit_count * definition.unit_cost();

    let raw_cooling = match definition.unit() {
        InterventionUnit::Tree => {
            unit_count * definition.unit_cooling() * TREE_FOOTPRINT_M2 / area_m2
        }
        InterventionUnit::Area => {
            coverage_area / AREA_COOLING_REFERENCE_M2 * definition.unit_cooling()
        }
    };
    let cooling = raw_cooling.min(MAX_COOLING_C);

    let cost_per_degree = total_cost / cooling.max(MIN_COOLING_DENOMINATOR_C);
    let population = as_float(hotspot.pop_exposed()).max(1.0);
    let cost_per_person = total_cost / population / COST_PER_PERSON_CALIBRATION;

    let efficiency_unit = if total_cost >= LARGE_COST_THRESHOLD {
        EfficiencyUnit::PerHundredThousand
    } else {
        EfficiencyUnit::PerThousand
    };
    // Zero cost only arises from zero units, which also means zero cooling.
    let efficiency = if total_cost > 0.0 {
        round_to(cooling / (total_cost / efficiency_unit.divisor()), 3)
    } else {
        0.0
    };

    Estimate {
        unit_count,
        coverage_area,
        total_cost,
        cooling,
        cost_per_degree,
        cost_per_person,
        efficiency,
        efficiency_unit,
    }
}

impl Estimate {
    /// Whether the estimate stays within `budget`; always true without one.
    pub(crate) fn fits(&self, budget: Option<Budget>) -> bool {
        budget.is_none_or(|cap| self.total_cost <= as_float(cap.amount()))
    }

    pub(crate) fn into_recommendation(
        self,
        definition: &InterventionDefinition,
        hotspot: &Hotspot,
    ) -> Recommendation {
        Recommendation {
            kind: definition.kind().to_owned(),
            description: definition.description().to_owned(),
            unit: definition.unit(),
            unit_count: truncate(self.unit_count),
            coverage_area: truncate(self.coverage_area),
            total_cost: truncate(self.total_cost),
            cooling_effect: round_to(self.cooling, 2),
            pop_benefit: hotspot.pop_exposed(),
            cost_per_degree: truncate(self.cost_per_degree),
            cost_per_person: truncate(self.cost_per_person),
            efficiency_score: self.efficiency,
            efficiency_unit: self.efficiency_unit,
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "currency amounts and head counts stay far below 2^52"
)]
pub(crate) const fn as_float(value: u64) -> f64 {
    value as f64
}
