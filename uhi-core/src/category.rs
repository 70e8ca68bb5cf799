//! Heat categories used to band hotspots by land surface temperature.
//!
//! The enum offers compile-time safety for temperature filters.
//!
//! # Examples
//! ```
//! use uhi_core::HeatCategory;
//!
//! assert_eq!(HeatCategory::Extreme.as_str(), "extreme");
//! assert_eq!(HeatCategory::from_temperature(37.2), Some(HeatCategory::High));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lower bound (inclusive) of the extreme heat band in degrees Celsius.
pub const EXTREME_HEAT_THRESHOLD_C: f64 = 40.0;

/// Lower bound (inclusive) of the high heat band in degrees Celsius.
pub const HIGH_HEAT_THRESHOLD_C: f64 = 35.0;

/// Lower bound (inclusive) of the moderate heat band in degrees Celsius.
pub const MODERATE_HEAT_THRESHOLD_C: f64 = 30.0;

/// Temperature band of a hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatCategory {
    /// 40 °C and above.
    Extreme,
    /// From 35 °C up to 40 °C.
    High,
    /// From 30 °C up to 35 °C. Cooler readings fall in no band.
    Moderate,
}

impl HeatCategory {
    /// Classify a land surface temperature.
    ///
    /// Returns `None` below [`MODERATE_HEAT_THRESHOLD_C`].
    ///
    /// # Examples
    /// ```
    /// use uhi_core::HeatCategory;
    ///
    /// assert_eq!(HeatCategory::from_temperature(40.0), Some(HeatCategory::Extreme));
    /// assert_eq!(HeatCategory::from_temperature(32.4), Some(HeatCategory::Moderate));
    /// assert_eq!(HeatCategory::from_temperature(25.0), None);
    /// ```
    #[must_use]
    pub fn from_temperature(temperature_c: f64) -> Option<Self> {
        if temperature_c >= EXTREME_HEAT_THRESHOLD_C {
            Some(Self::Extreme)
        } else if temperature_c >= HIGH_HEAT_THRESHOLD_C {
            Some(Self::High)
        } else if temperature_c >= MODERATE_HEAT_THRESHOLD_C {
            Some(Self::Moderate)
        } else {
            None
        }
    }

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Extreme => "extreme",
            Self::High => "high",
            Self::Moderate => "moderate",
        }
    }

    /// Human-readable label, e.g. `"Extreme Heat"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Extreme => "Extreme Heat",
            Self::High => "High Heat",
            Self::Moderate => "Moderate Heat",
        }
    }
}

impl std::fmt::Display for HeatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown heat category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heat category '{0}'")]
pub struct ParseHeatCategoryError(pub String);

impl std::str::FromStr for HeatCategory {
    type Err = ParseHeatCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        let word = normalised.strip_suffix(" heat").unwrap_or(&normalised);
        match word {
            "extreme" => Ok(Self::Extreme),
            "high" => Ok(Self::High),
            "moderate" => Ok(Self::Moderate),
            _ => Err(ParseHeatCategoryError(s.to_owned())),
        }
    }
}
