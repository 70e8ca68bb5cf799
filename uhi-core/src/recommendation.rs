//! Recommendation records produced by a [`Recommender`](crate::Recommender).

use serde::{Deserialize, Serialize};

use crate::InterventionUnit;
use crate::rounding::round_to;

/// Unit in which an efficiency score is expressed.
///
/// The unit switches with the magnitude of the total cost so that cheap and
/// expensive interventions both produce readable scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EfficiencyUnit {
    /// Cooling per 100,000 currency units; used when the total cost is at
    /// least 100,000.
    #[serde(rename = "°C per 100,000 currency units")]
    PerHundredThousand,
    /// Cooling per 1,000 currency units.
    #[serde(rename = "°C per 1,000 currency units")]
    PerThousand,
}

impl EfficiencyUnit {
    /// Human-readable unit label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PerHundredThousand => "°C per 100,000 currency units",
            Self::PerThousand => "°C per 1,000 currency units",
        }
    }

    /// Currency amount the score is normalised by.
    #[must_use]
    pub const fn divisor(&self) -> f64 {
        match self {
            Self::PerHundredThousand => 100_000.0,
            Self::PerThousand => 1_000.0,
        }
    }
}

impl std::fmt::Display for EfficiencyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Costed estimate for deploying one intervention over a hotspot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Intervention kind, copied from the definition.
    pub kind: String,
    /// Description, copied from the definition.
    pub description: String,
    /// Deployment unit, copied from the definition.
    pub unit: InterventionUnit,
    /// Number of units to deploy.
    pub unit_count: u64,
    /// Effective area treated, in square metres.
    pub coverage_area: u64,
    /// Total cost in whole currency units.
    pub total_cost: u64,
    /// Temperature reduction in °C, capped and rounded to 2 decimals.
    pub cooling_effect: f64,
    /// Population exposed in the hotspot.
    pub pop_benefit: u64,
    /// Currency spent per °C of cooling.
    pub cost_per_degree: u64,
    /// Currency spent per exposed person (calibrated).
    pub cost_per_person: u64,
    /// Cooling per unit currency, rounded to 3 decimals.
    pub efficiency_score: f64,
    /// Unit of [`Self::efficiency_score`].
    pub efficiency_unit: EfficiencyUnit,
}

/// Immutable, ranked list of recommendations.
///
/// Entries are ordered by `efficiency_score`, highest first; equal scores keep
/// the order in which they were supplied.
///
/// # Examples
/// ```
/// use uhi_core::Recommendations;
///
/// let ranked = Recommendations::ranked(Vec::new());
/// assert!(ranked.is_empty());
/// assert_eq!(ranked.summary(3).interventions, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Recommendation>", into = "Vec<Recommendation>")]
pub struct Recommendations {
    items: Vec<Recommendation>,
}

impl Recommendations {
    /// Rank recommendations by efficiency score, descending and stable.
    #[must_use]
    pub fn ranked(mut items: Vec<Recommendation>) -> Self {
        items.sort_by(|a, b| b.efficiency_score.total_cmp(&a.efficiency_score));
        Self { items }
    }

    /// Iterate in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation> {
        self.items.iter()
    }

    /// Recommendations in rank order.
    #[must_use]
    pub fn as_slice(&self) -> &[Recommendation] {
        &self.items
    }

    /// The best `n` recommendations (fewer when the list is shorter).
    #[must_use]
    pub fn top(&self, n: usize) -> &[Recommendation] {
        self.items.get(..n).unwrap_or(&self.items)
    }

    /// Look a recommendation up by intervention kind.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&Recommendation> {
        self.items.iter().find(|item| item.kind == kind)
    }

    /// Number of recommendations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether nothing was recommended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Combined cooling and cost of the best `n` recommendations.
    #[must_use]
    pub fn summary(&self, n: usize) -> PortfolioSummary {
        PortfolioSummary::from_slice(self.top(n))
    }

    /// Consume the wrapper and return the ranked list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Recommendation> {
        self.items
    }
}

impl From<Vec<Recommendation>> for Recommendations {
    fn from(items: Vec<Recommendation>) -> Self {
        Self::ranked(items)
    }
}

impl From<Recommendations> for Vec<Recommendation> {
    fn from(recommendations: Recommendations) -> Self {
        recommendations.items
    }
}

impl<'a> IntoIterator for &'a Recommendations {
    type Item = &'a Recommendation;
    type IntoIter = std::slice::Iter<'a, Recommendation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Aggregate of several recommendations deployed together.
///
/// Cooling effects are summed naively; interactions between interventions are
/// not modelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of recommendations combined.
    pub interventions: usize,
    /// Summed cooling in °C, rounded to 2 decimals.
    pub combined_cooling: f64,
    /// Summed total cost in currency units.
    pub combined_cost: u64,
}

impl PortfolioSummary {
    #[expect(
        clippy::float_arithmetic,
        reason = "summing rounded cooling effects"
    )]
    fn from_slice(items: &[Recommendation]) -> Self {
        let cooling: f64 = items.iter().map(|item| item.cooling_effect).sum();
        let combined_cost = items
            .iter()
            .fold(0_u64, |total, item| total.saturating_add(item.total_cost));
        Self {
            interventions: items.len(),
            combined_cooling: round_to(cooling, 2),
            combined_cost,
        }
    }
}
