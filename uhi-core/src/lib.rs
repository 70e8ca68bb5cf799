//! Core domain types for the urban heat island intervention engine.
//!
//! These models validate on construction so downstream scoring never sees a
//! hotspot without area or an intervention without a price. Constructors
//! return `Result` to surface invalid input early, and the serde
//! representations run through the same checks.
//!
//! # Examples
//!
//! ```
//! use uhi_core::{Hotspot, InterventionCatalog};
//!
//! # fn main() -> Result<(), uhi_core::HotspotError> {
//! let hotspot = Hotspot::new(2.5, 1_500)?;
//! let catalog = InterventionCatalog::default();
//! assert_eq!(hotspot.area_m2(), 25_000.0);
//! assert_eq!(catalog.len(), 5);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod budget;
pub mod catalog;
pub mod category;
pub mod hotspot;
pub mod intervention;
pub mod recommendation;
pub mod recommender;
pub mod rounding;
pub mod samples;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use budget::{BUDGET_PRESETS, Budget, BudgetError, CoverageError, CoveragePercent};
pub use catalog::{CatalogError, InterventionCatalog};
pub use category::{HeatCategory, ParseHeatCategoryError};
pub use hotspot::{Hotspot, HotspotError, filter_by_category};
pub use intervention::{InterventionDefinition, InterventionError, InterventionUnit};
pub use recommendation::{EfficiencyUnit, PortfolioSummary, Recommendation, Recommendations};
pub use recommender::Recommender;
pub use samples::sample_hotspots;
