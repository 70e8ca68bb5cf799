//! Indicative implementation timelines.

/// Timeline for tree planting, which waits on the planting season.
pub const PLANTING_SEASON_TIMELINE: &str = "8-12 weeks (includes planting season)";

/// Timeline for roof works, which waits on dry weather.
pub const WEATHER_DEPENDENT_TIMELINE: &str = "6-10 weeks (weather dependent)";

/// Timeline for every other intervention.
pub const STANDARD_TIMELINE: &str = "4-8 weeks (standard implementation)";

/// Indicative time from approval to completion for an intervention kind.
///
/// # Examples
/// ```
/// use uhi_recommender::implementation_timeline;
///
/// assert_eq!(implementation_timeline("Cool Roof"), "6-10 weeks (weather dependent)");
/// ```
#[must_use]
pub fn implementation_timeline(kind: &str) -> &'static str {
    if kind == "Street Trees" {
        PLANTING_SEASON_TIMELINE
    } else if kind.contains("Roof") {
        WEATHER_DEPENDENT_TIMELINE
    } else {
        STANDARD_TIMELINE
    }
}
