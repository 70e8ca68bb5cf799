//! Recommend interventions for a hotspot.
//!
//! The `Recommender` trait turns a [`Hotspot`](crate::Hotspot) and an optional
//! [`Budget`](crate::Budget) into ranked
//! [`Recommendations`](crate::Recommendations).

use crate::{Budget, Hotspot, Recommendations};

/// Produce ranked intervention recommendations for a hotspot.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so recommenders can
/// be shared across threads. The method is infallible: hotspots are validated
/// on construction, and an empty result is a valid answer meaning that
/// nothing fits the budget.
///
/// Implementations must:
/// - Exclude every recommendation whose `total_cost` exceeds the budget.
/// - Return entries ordered by `efficiency_score`, highest first.
/// - Be deterministic for identical inputs.
///
/// # Examples
///
/// ```rust
/// use uhi_core::{Budget, Hotspot, Recommendations, Recommender};
///
/// struct NothingFits;
///
/// impl Recommender for NothingFits {
///     fn recommend(&self, _hotspot: &Hotspot, _budget: Option<Budget>) -> Recommendations {
///         Recommendations::default()
///     }
/// }
///
/// let hotspot = Hotspot::new(1.0, 10).expect("valid hotspot");
/// assert!(NothingFits.recommend(&hotspot, None).is_empty());
/// ```
pub trait Recommender: Send + Sync {
    /// Recommend interventions for `hotspot` within `budget`.
    fn recommend(&self, hotspot: &Hotspot, budget: Option<Budget>) -> Recommendations;
}
