//! Intervention definitions: the rows of an intervention catalogue.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How an intervention is deployed and priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterventionUnit {
    /// Priced per tree; each tree shades a fixed footprint.
    Tree,
    /// Priced per square metre of treated surface.
    #[serde(alias = "m²", alias = "m2")]
    Area,
}

impl InterventionUnit {
    /// Return the unit as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Area => "area",
        }
    }
}

impl std::fmt::Display for InterventionUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mitigation action with a per-unit cost and cooling contribution.
///
/// `unit_cooling` is interpreted per unit kind: for trees it is the
/// reduction within one tree's footprint, for area-based kinds it is the
/// reduction per 1,000 m² treated.
///
/// # Examples
/// ```
/// use uhi_core::{InterventionDefinition, InterventionUnit};
///
/// # fn main() -> Result<(), uhi_core::InterventionError> {
/// let roof = InterventionDefinition::new(
///     "Cool Roof",
///     InterventionUnit::Area,
///     350.0,
///     1.2,
///     "White/reflective roof coating or tiles",
/// )?;
/// assert_eq!(roof.kind(), "Cool Roof");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "InterventionRecord")]
pub struct InterventionDefinition {
    kind: String,
    unit: InterventionUnit,
    unit_cost: f64,
    unit_cooling: f64,
    description: String,
}

/// Errors returned by [`InterventionDefinition::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterventionError {
    /// The kind identifier was empty or whitespace.
    #[error("intervention kind must not be blank")]
    BlankKind,
    /// Unit cost was not a positive finite amount.
    #[error("unit cost for '{kind}' must be positive and finite, got {value}")]
    InvalidUnitCost {
        /// Offending intervention kind.
        kind: String,
        /// Rejected value.
        value: f64,
    },
    /// Unit cooling was negative or not finite.
    #[error("unit cooling for '{kind}' must be non-negative and finite, got {value}")]
    InvalidUnitCooling {
        /// Offending intervention kind.
        kind: String,
        /// Rejected value.
        value: f64,
    },
}

impl InterventionDefinition {
    /// Validate and construct a definition.
    ///
    /// # Errors
    /// Returns [`InterventionError`] for a blank kind, a non-positive unit
    /// cost or a negative cooling contribution.
    pub fn new(
        kind: impl Into<String>,
        unit: InterventionUnit,
        unit_cost: f64,
        unit_cooling: f64,
        description: impl Into<String>,
    ) -> Result<Self, InterventionError> {
        let kind = kind.into();
        if kind.trim().is_empty() {
            return Err(InterventionError::BlankKind);
        }
        if !unit_cost.is_finite() || unit_cost <= 0.0 {
            return Err(InterventionError::InvalidUnitCost {
                kind,
                value: unit_cost,
            });
        }
        if !unit_cooling.is_finite() || unit_cooling < 0.0 {
            return Err(InterventionError::InvalidUnitCooling {
                kind,
                value: unit_cooling,
            });
        }
        Ok(Self {
            kind,
            unit,
            unit_cost,
            unit_cooling,
            description: description.into(),
        })
    }

    /// Identifier such as `"Street Trees"`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Deployment unit.
    #[must_use]
    pub const fn unit(&self) -> InterventionUnit {
        self.unit
    }

    /// Currency amount per unit.
    #[must_use]
    pub const fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    /// Baseline cooling contribution per unit in °C.
    #[must_use]
    pub const fn unit_cooling(&self) -> f64 {
        self.unit_cooling
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Deserialize)]
struct InterventionRecord {
    #[serde(alias = "type")]
    kind: String,
    unit: InterventionUnit,
    #[serde(alias = "cost_per_unit")]
    unit_cost: f64,
    #[serde(alias = "cooling_per_unit")]
    unit_cooling: f64,
    #[serde(default)]
    description: String,
}

impl TryFrom<InterventionRecord> for InterventionDefinition {
    type Error = InterventionError;

    fn try_from(record: InterventionRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.kind,
            record.unit,
            record.unit_cost,
            record.unit_cooling,
            record.description,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_kind(#[case] kind: &str) {
        let result = InterventionDefinition::new(kind, InterventionUnit::Tree, 400.0, 0.5, "");
        assert_eq!(result, Err(InterventionError::BlankKind));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_unit_cost(#[case] cost: f64) {
        let result = InterventionDefinition::new("Trees", InterventionUnit::Tree, cost, 0.5, "");
        assert!(matches!(
            result,
            Err(InterventionError::InvalidUnitCost { .. })
        ));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(f64::NAN)]
    fn rejects_invalid_unit_cooling(#[case] cooling: f64) {
        let result =
            InterventionDefinition::new("Trees", InterventionUnit::Tree, 400.0, cooling, "");
        assert!(matches!(
            result,
            Err(InterventionError::InvalidUnitCooling { .. })
        ));
    }

    #[rstest]
    fn accepts_zero_cooling() {
        let result = InterventionDefinition::new("Paint", InterventionUnit::Area, 10.0, 0.0, "");
        assert!(result.is_ok());
    }

    #[rstest]
    fn deserialises_aliased_field_names() {
        let json = r#"{
            "type": "Green Roof",
            "cost_per_unit": 1200,
            "cooling_per_unit": 0.8,
            "unit": "m²",
            "description": "Extensive green roof system with native plants"
        }"#;
        let definition: InterventionDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(definition.kind(), "Green Roof");
        assert_eq!(definition.unit(), InterventionUnit::Area);
        assert!((definition.unit_cost() - 1200.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn deserialising_rejects_unknown_unit() {
        let json = r#"{"kind": "Shade", "unit": "hectare", "unit_cost": 1, "unit_cooling": 1}"#;
        assert!(serde_json::from_str::<InterventionDefinition>(json).is_err());
    }

    #[rstest]
    fn deserialising_rejects_missing_cost() {
        let json = r#"{"kind": "Shade", "unit": "tree", "unit_cooling": 1}"#;
        assert!(serde_json::from_str::<InterventionDefinition>(json).is_err());
    }
}
