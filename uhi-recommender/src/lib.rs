//! Catalogue-driven intervention recommender for urban heat island hotspots.
//!
//! The crate provides three capabilities:
//! - **Recommendation** estimates the cost and cooling of every catalogue
//!   entry over a hotspot, drops entries above the budget, and ranks the rest
//!   by efficiency. [`CatalogRecommender`] implements the
//!   [`Recommender`](uhi_core::Recommender) trait so callers can swap in other
//!   strategies.
//! - **Impact simulation** projects the effect of treating only part of a
//!   hotspot with a single intervention.
//! - **Timelines** give an indicative implementation period per kind.
//!
//! # Examples
//!
//! ```
//! use uhi_core::{Budget, Hotspot, Recommender};
//! use uhi_recommender::CatalogRecommender;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hotspot = Hotspot::new(2.5, 1_500)?;
//! let recommender = CatalogRecommender::default();
//!
//! let ranked = recommender.recommend(&hotspot, None);
//! assert_eq!(ranked.as_slice()[0].kind, "Street Trees");
//!
//! let within = recommender.recommend(&hotspot, Some(Budget::new(250_000)?));
//! assert_eq!(within.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub mod scoring;
mod simulation;
mod timeline;

pub use error::SimulationError;
pub use simulation::{ImpactSimulation, simulate_impact};
pub use timeline::{
    PLANTING_SEASON_TIMELINE, STANDARD_TIMELINE, WEATHER_DEPENDENT_TIMELINE,
    implementation_timeline,
};

use uhi_core::{
    Budget, CoveragePercent, Hotspot, InterventionCatalog, Recommendations, Recommender,
};

/// Recommend interventions from `catalog` for `hotspot` within `budget`.
///
/// Every entry is estimated independently; entries whose total cost exceeds
/// the budget are dropped and the rest are ranked by efficiency score, highest
/// first, with ties kept in catalogue order. An empty catalogue or a budget
/// nothing fits yields an empty result.
#[must_use]
pub fn recommend(
    hotspot: &Hotspot,
    catalog: &InterventionCatalog,
    budget: Option<Budget>,
) -> Recommendations {
    let mut items = Vec::with_capacity(catalog.len());
    for definition in catalog {
        let estimate = scoring::estimate(definition, hotspot);
        if !estimate.fits(budget) {
            log::debug!(
                "excluding {}: total cost {} exceeds budget {}",
                definition.kind(),
                estimate.total_cost,
                budget.map_or(0, Budget::amount),
            );
            continue;
        }
        items.push(estimate.into_recommendation(definition, hotspot));
    }
    Recommendations::ranked(items)
}

/// [`Recommender`] backed by an [`InterventionCatalog`].
///
/// # Examples
/// ```
/// use uhi_core::{CoveragePercent, Hotspot};
/// use uhi_recommender::{CatalogRecommender, SimulationError};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recommender = CatalogRecommender::default();
/// let hotspot = Hotspot::new(2.5, 1_500)?;
/// let coverage = CoveragePercent::default();
///
/// let simulation = recommender.simulate(&hotspot, "Cool Roof", coverage)?;
/// assert_eq!(simulation.estimated_cost, 4_375_000);
///
/// let missing = recommender.simulate(&hotspot, "Misting Fans", coverage);
/// assert!(matches!(missing, Err(SimulationError::UnknownIntervention { .. })));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogRecommender {
    catalog: InterventionCatalog,
}

impl CatalogRecommender {
    /// Create a recommender over `catalog`.
    #[must_use]
    pub const fn new(catalog: InterventionCatalog) -> Self {
        Self { catalog }
    }

    /// The catalogue recommendations are drawn from.
    #[must_use]
    pub const fn catalog(&self) -> &InterventionCatalog {
        &self.catalog
    }

    /// Simulate deploying the intervention named `kind` over `coverage`
    /// percent of `hotspot`.
    ///
    /// # Errors
    /// Returns [`SimulationError::UnknownIntervention`] when the catalogue has
    /// no entry for `kind`.
    pub fn simulate(
        &self,
        hotspot: &Hotspot,
        kind: &str,
        coverage: CoveragePercent,
    ) -> Result<ImpactSimulation, SimulationError> {
        let definition =
            self.catalog
                .get(kind)
                .ok_or_else(|| SimulationError::UnknownIntervention {
                    kind: kind.to_owned(),
                })?;
        Ok(simulate_impact(hotspot, definition, coverage))
    }
}

impl Recommender for CatalogRecommender {
    fn recommend(&self, hotspot: &Hotspot, budget: Option<Budget>) -> Recommendations {
        recommend(hotspot, &self.catalog, budget)
    }
}
