#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]
#![expect(
    clippy::float_arithmetic,
    reason = "summary cooling is compared with a tolerance"
)]

//! Behavioural coverage for catalogue recommendations.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use uhi_core::{Budget, Hotspot, Recommendations, Recommender};
use uhi_recommender::CatalogRecommender;

struct RecommendContext {
    recommender: CatalogRecommender,
    hotspot: RefCell<Option<Hotspot>>,
    budget: RefCell<Option<Budget>>,
    result: RefCell<Recommendations>,
}

#[fixture]
fn context() -> RecommendContext {
    RecommendContext {
        recommender: CatalogRecommender::default(),
        hotspot: RefCell::new(None),
        budget: RefCell::new(None),
        result: RefCell::new(Recommendations::default()),
    }
}

#[given("a 2.5 hectare hotspot with 1500 exposed residents")]
fn industrial_hotspot(context: &RecommendContext) {
    let hotspot = Hotspot::new(2.5, 1_500).expect("valid hotspot");
    context.hotspot.replace(Some(hotspot));
}

#[given("a budget of {amount} currency units")]
fn budget_of(context: &RecommendContext, amount: u64) {
    let budget = Budget::new(amount).expect("non-zero budget");
    context.budget.replace(Some(budget));
}

fn run(context: &RecommendContext, budget: Option<Budget>) {
    let staged = context.hotspot.borrow();
    let hotspot = staged.as_ref().expect("hotspot must be staged");
    context
        .result
        .replace(context.recommender.recommend(hotspot, budget));
}

#[when("I ask for recommendations without a budget")]
fn recommend_unbounded(context: &RecommendContext) {
    run(context, None);
}

#[when("I ask for recommendations within the budget")]
fn recommend_within_budget(context: &RecommendContext) {
    let budget = *context.budget.borrow();
    assert!(budget.is_some(), "budget must be staged");
    run(context, budget);
}

#[then("all 5 interventions are recommended")]
fn all_recommended(context: &RecommendContext) {
    assert_eq!(context.result.borrow().len(), 5);
}

#[then("Street Trees ranks first with 500 trees costing 200000")]
fn street_trees_first(context: &RecommendContext) {
    let result = context.result.borrow();
    let first = result.as_slice().first().expect("at least one entry");
    assert_eq!(first.kind, "Street Trees");
    assert_eq!(first.unit_count, 500);
    assert_eq!(first.total_cost, 200_000);
}

#[then("nothing is recommended")]
fn nothing_recommended(context: &RecommendContext) {
    assert!(context.result.borrow().is_empty());
}

#[then("only Street Trees is recommended")]
fn only_street_trees(context: &RecommendContext) {
    let result = context.result.borrow();
    let kinds: Vec<&str> = result.iter().map(|item| item.kind.as_str()).collect();
    assert_eq!(kinds, ["Street Trees"]);
}

#[then("the top three combine 6.5 degrees of cooling for 13575000")]
fn top_three_summary(context: &RecommendContext) {
    let summary = context.result.borrow().summary(3);
    assert_eq!(summary.interventions, 3);
    assert!((summary.combined_cooling - 6.5).abs() < 1e-9);
    assert_eq!(summary.combined_cost, 13_575_000);
}

#[scenario(path = "tests/features/recommend.feature", index = 0)]
fn ranking_without_budget(context: RecommendContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommend.feature", index = 1)]
fn tight_budget_excludes_everything(context: RecommendContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommend.feature", index = 2)]
fn modest_budget_keeps_trees(context: RecommendContext) {
    let _ = context;
}

#[scenario(path = "tests/features/recommend.feature", index = 3)]
fn summarising_top_three(context: RecommendContext) {
    let _ = context;
}
