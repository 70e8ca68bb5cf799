//! Test-only helpers shared by unit and behaviour tests across the workspace.

use crate::{
    Budget, EfficiencyUnit, Hotspot, InterventionUnit, Recommendation, Recommendations,
    Recommender,
};

/// `Recommender` that replays a fixed list, applying only the budget filter.
///
/// Useful for exercising presentation code without the scoring maths.
#[derive(Debug, Clone, Default)]
pub struct FixedRecommender {
    items: Vec<Recommendation>,
}

impl FixedRecommender {
    /// Create a recommender that always proposes `items`.
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Recommendation>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

impl Recommender for FixedRecommender {
    fn recommend(&self, _hotspot: &Hotspot, budget: Option<Budget>) -> Recommendations {
        let within_budget = self
            .items
            .iter()
            .filter(|item| budget.is_none_or(|cap| item.total_cost <= cap.amount()))
            .cloned()
            .collect();
        Recommendations::ranked(within_budget)
    }
}

/// Build a recommendation with the given kind, score and cost and neutral
/// values elsewhere.
#[must_use]
pub fn stub_recommendation(kind: &str, efficiency_score: f64, total_cost: u64) -> Recommendation {
    Recommendation {
        kind: kind.to_owned(),
        description: format!("{kind} (stub)"),
        unit: InterventionUnit::Area,
        unit_count: 1,
        coverage_area: 1,
        total_cost,
        cooling_effect: 1.0,
        pop_benefit: 0,
        cost_per_degree: total_cost,
        cost_per_person: total_cost,
        efficiency_score,
        efficiency_unit: EfficiencyUnit::PerThousand,
    }
}
