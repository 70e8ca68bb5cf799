//! Facade crate for the urban heat island intervention engine.
//!
//! This crate re-exports the core domain types and, behind the default
//! `recommender` feature, the catalogue-driven recommender and simulator.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "recommender")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use uhi_engine::{Budget, CatalogRecommender, Hotspot, Recommender};
//!
//! let hotspot = Hotspot::new(2.5, 1_500)?;
//! let ranked = CatalogRecommender::default().recommend(&hotspot, Some(Budget::new(250_000)?));
//! assert_eq!(ranked.len(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "recommender"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use uhi_core::{
    BUDGET_PRESETS, Budget, BudgetError, CatalogError, CoverageError, CoveragePercent,
    EfficiencyUnit, HeatCategory, Hotspot, HotspotError, InterventionCatalog,
    InterventionDefinition, InterventionError, InterventionUnit, ParseHeatCategoryError,
    PortfolioSummary, Recommendation, Recommendations, Recommender, filter_by_category,
    sample_hotspots,
};

#[cfg(feature = "recommender")]
pub use uhi_recommender::{
    CatalogRecommender, ImpactSimulation, SimulationError, implementation_timeline, recommend,
    simulate_impact,
};
