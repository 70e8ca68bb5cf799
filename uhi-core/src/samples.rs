//! Reference hotspots for Faisalabad.
//!
//! These stand in for satellite detections until a geospatial service feeds
//! real hotspots.

use crate::Hotspot;

/// Id, location, temperature (°C), area (ha) and exposed population.
const SAMPLE_HOTSPOTS: [(u32, &str, f64, f64, u64); 9] = [
    (1, "Industrial Area", 42.5, 2.5, 1_500),
    (2, "Dense Residential", 43.2, 3.2, 2_100),
    (3, "Market Area", 44.1, 1.2, 800),
    (4, "Commercial District", 38.8, 1.8, 1_200),
    (5, "Mixed Development", 37.2, 4.1, 2_800),
    (6, "Transport Hub", 39.5, 2.2, 1_600),
    (7, "Suburban Area", 33.1, 3.8, 2_200),
    (8, "Educational District", 34.7, 2.9, 1_900),
    (9, "Green Belt Edge", 32.4, 5.2, 3_100),
];

/// The nine reference hotspots, ordered by id.
///
/// # Examples
/// ```
/// use uhi_core::sample_hotspots;
///
/// let hotspots = sample_hotspots();
/// assert_eq!(hotspots.len(), 9);
/// assert_eq!(hotspots[0].location(), "Industrial Area");
/// ```
#[must_use]
pub fn sample_hotspots() -> Vec<Hotspot> {
    SAMPLE_HOTSPOTS
        .iter()
        .map(|&(id, location, temperature_c, area_ha, pop_exposed)| Hotspot {
            id,
            location: location.to_owned(),
            temperature_c: Some(temperature_c),
            area_ha,
            pop_exposed,
        })
        .collect()
}
