//! Hotspots: areas flagged with elevated surface temperature.
//!
//! Only `area_ha` and `pop_exposed` feed the scoring maths. The identifier,
//! location and temperature are carried for presentation and for banding by
//! [`HeatCategory`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::HeatCategory;

/// Square metres per hectare.
pub const SQUARE_METRES_PER_HECTARE: f64 = 10_000.0;

/// A geographic area with elevated surface temperature.
///
/// # Examples
/// ```
/// use uhi_core::{HeatCategory, Hotspot};
///
/// # fn main() -> Result<(), uhi_core::HotspotError> {
/// let hotspot = Hotspot::new(1.2, 800)?
///     .with_site(3, "Market Area")
///     .with_temperature(44.1)?;
/// assert_eq!(hotspot.category(), Some(HeatCategory::Extreme));
/// assert_eq!(hotspot.area_m2(), 12_000.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HotspotRecord")]
pub struct Hotspot {
    pub(crate) id: u32,
    pub(crate) location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) temperature_c: Option<f64>,
    pub(crate) area_ha: f64,
    pub(crate) pop_exposed: u64,
}

/// Errors returned when constructing a [`Hotspot`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HotspotError {
    /// Area was zero, negative or not a number.
    #[error("hotspot area must be a positive number of hectares, got {0}")]
    NonPositiveArea(f64),
    /// Temperature was NaN or infinite.
    #[error("hotspot temperature must be finite, got {0}")]
    NonFiniteTemperature(f64),
}

impl Hotspot {
    /// Validate and construct an anonymous hotspot.
    ///
    /// # Errors
    /// Returns [`HotspotError::NonPositiveArea`] unless `area_ha` is finite
    /// and greater than zero.
    pub fn new(area_ha: f64, pop_exposed: u64) -> Result<Self, HotspotError> {
        if !area_ha.is_finite() || area_ha <= 0.0 {
            return Err(HotspotError::NonPositiveArea(area_ha));
        }
        Ok(Self {
            id: 0,
            location: String::new(),
            temperature_c: None,
            area_ha,
            pop_exposed,
        })
    }

    /// Attach an identifier and location description.
    #[must_use]
    pub fn with_site(mut self, id: u32, location: impl Into<String>) -> Self {
        self.id = id;
        self.location = location.into();
        self
    }

    /// Attach a land surface temperature reading.
    ///
    /// # Errors
    /// Returns [`HotspotError::NonFiniteTemperature`] for NaN or infinite
    /// readings.
    pub fn with_temperature(mut self, temperature_c: f64) -> Result<Self, HotspotError> {
        if !temperature_c.is_finite() {
            return Err(HotspotError::NonFiniteTemperature(temperature_c));
        }
        self.temperature_c = Some(temperature_c);
        Ok(self)
    }

    /// Identifier, `0` when unassigned.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Location description.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Land surface temperature in degrees Celsius, if known.
    #[must_use]
    pub const fn temperature_c(&self) -> Option<f64> {
        self.temperature_c
    }

    /// Area in hectares; always positive.
    #[must_use]
    pub const fn area_ha(&self) -> f64 {
        self.area_ha
    }

    /// Area in square metres.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "unit conversion from hectares to square metres"
    )]
    pub fn area_m2(&self) -> f64 {
        self.area_ha * SQUARE_METRES_PER_HECTARE
    }

    /// Number of people living in the affected area.
    #[must_use]
    pub const fn pop_exposed(&self) -> u64 {
        self.pop_exposed
    }

    /// Temperature band, when a temperature is known and at least 30 °C.
    #[must_use]
    pub fn category(&self) -> Option<HeatCategory> {
        self.temperature_c.and_then(HeatCategory::from_temperature)
    }
}

/// Wire shape of a hotspot before validation.
#[derive(Debug, Deserialize)]
struct HotspotRecord {
    #[serde(default)]
    id: u32,
    #[serde(default, alias = "name")]
    location: String,
    #[serde(default, alias = "temp")]
    temperature_c: Option<f64>,
    area_ha: f64,
    #[serde(default)]
    pop_exposed: u64,
}

impl TryFrom<HotspotRecord> for Hotspot {
    type Error = HotspotError;

    fn try_from(record: HotspotRecord) -> Result<Self, Self::Error> {
        let hotspot =
            Self::new(record.area_ha, record.pop_exposed)?.with_site(record.id, record.location);
        match record.temperature_c {
            Some(temperature) => hotspot.with_temperature(temperature),
            None => Ok(hotspot),
        }
    }
}

/// Keep the hotspots belonging to `category`.
///
/// `None` keeps every hotspot. When a category is requested but nothing
/// matches, the full list is returned so a caller always has something to
/// select from.
///
/// # Examples
/// ```
/// use uhi_core::{HeatCategory, filter_by_category, sample_hotspots};
///
/// let hotspots = sample_hotspots();
/// let extreme = filter_by_category(&hotspots, Some(HeatCategory::Extreme));
/// assert_eq!(extreme.len(), 3);
/// ```
#[must_use]
pub fn filter_by_category(hotspots: &[Hotspot], category: Option<HeatCategory>) -> Vec<&Hotspot> {
    let Some(wanted) = category else {
        return hotspots.iter().collect();
    };
    let matching: Vec<&Hotspot> = hotspots
        .iter()
        .filter(|hotspot| hotspot.category() == Some(wanted))
        .collect();
    if matching.is_empty() {
        log::warn!(
            "no hotspots in the {wanted} band; falling back to all {} hotspots",
            hotspots.len()
        );
        return hotspots.iter().collect();
    }
    matching
}
