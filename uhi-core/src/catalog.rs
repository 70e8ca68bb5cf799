//! Intervention catalogues.
//!
//! A catalogue is an ordered configuration table of
//! [`InterventionDefinition`]s. Order matters: it breaks ties when
//! recommendations share an efficiency score. The [`Default`] catalogue holds
//! the five reference interventions priced for Faisalabad.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{InterventionDefinition, InterventionError, InterventionUnit};

/// Ordered set of intervention definitions with unique kinds.
///
/// # Examples
/// ```
/// use uhi_core::{InterventionCatalog, InterventionUnit};
///
/// let catalog = InterventionCatalog::default();
/// let trees = catalog.get("Street Trees").expect("reference catalogue has trees");
/// assert_eq!(trees.unit(), InterventionUnit::Tree);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<InterventionDefinition>",
    into = "Vec<InterventionDefinition>"
)]
pub struct InterventionCatalog {
    entries: Vec<InterventionDefinition>,
}

/// Errors returned by [`InterventionCatalog::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Two entries share the same kind.
    #[error("intervention kind '{0}' appears more than once")]
    DuplicateKind(String),
    /// An entry failed validation.
    #[error(transparent)]
    Intervention(#[from] InterventionError),
}

impl InterventionCatalog {
    /// Validate and construct a catalogue.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateKind`] when two definitions share a
    /// kind.
    pub fn new(entries: Vec<InterventionDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.kind()) {
                return Err(CatalogError::DuplicateKind(entry.kind().to_owned()));
            }
        }
        Ok(Self { entries })
    }

    /// A catalogue with no interventions.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Look a definition up by kind.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&InterventionDefinition> {
        self.entries.iter().find(|entry| entry.kind() == kind)
    }

    /// Iterate over definitions in catalogue order.
    pub fn iter(&self) -> std::slice::Iter<'_, InterventionDefinition> {
        self.entries.iter()
    }

    /// Definitions in catalogue order.
    #[must_use]
    pub fn as_slice(&self) -> &[InterventionDefinition] {
        &self.entries
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Kinds in catalogue order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(InterventionDefinition::kind)
    }
}

impl Default for InterventionCatalog {
    fn default() -> Self {
        let entries = REFERENCE_INTERVENTIONS
            .iter()
            .filter_map(|&(kind, unit, cost, cooling, description)| {
                InterventionDefinition::new(kind, unit, cost, cooling, description).ok()
            })
            .collect();
        Self { entries }
    }
}

/// Kind, unit, unit cost (PKR), unit cooling (°C) and description.
const REFERENCE_INTERVENTIONS: [(&str, InterventionUnit, f64, f64, &str); 5] = [
    (
        "Street Trees",
        InterventionUnit::Tree,
        400.0,
        0.5,
        "Native shade trees suitable for Faisalabad climate",
    ),
    (
        "Green Roof",
        InterventionUnit::Area,
        1_200.0,
        0.8,
        "Extensive green roof system with native plants",
    ),
    (
        "Cool Roof",
        InterventionUnit::Area,
        350.0,
        1.2,
        "White/reflective roof coating or tiles",
    ),
    (
        "Reflective Pavement",
        InterventionUnit::Area,
        800.0,
        0.6,
        "High-albedo pavement coating for roads",
    ),
    (
        "Urban Water Feature",
        InterventionUnit::Area,
        2_500.0,
        1.5,
        "Fountains or water channels for evaporative cooling",
    ),
];

impl TryFrom<Vec<InterventionDefinition>> for InterventionCatalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<InterventionDefinition>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<InterventionCatalog> for Vec<InterventionDefinition> {
    fn from(catalog: InterventionCatalog) -> Self {
        catalog.entries
    }
}

impl<'a> IntoIterator for &'a InterventionCatalog {
    type Item = &'a InterventionDefinition;
    type IntoIter = std::slice::Iter<'a, InterventionDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
