//! Spending caps and coverage inputs.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Budget choices offered to presentation layers, in currency units.
pub const BUDGET_PRESETS: [u64; 5] = [100_000, 250_000, 500_000, 1_000_000, 2_000_000];

/// Strictly positive spending cap in whole currency units.
///
/// Absence of a budget (`Option::None`) means unconstrained.
///
/// # Examples
/// ```
/// use uhi_core::Budget;
///
/// # fn main() -> Result<(), uhi_core::BudgetError> {
/// let budget = Budget::new(250_000)?;
/// assert_eq!(budget.amount(), 250_000);
/// assert!(Budget::new(0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Budget(NonZeroU64);

/// Errors returned by [`Budget::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// A zero budget was supplied.
    #[error("budget must be greater than zero")]
    Zero,
}

impl Budget {
    /// Validate and construct a budget.
    ///
    /// # Errors
    /// Returns [`BudgetError::Zero`] for a zero amount.
    pub fn new(amount: u64) -> Result<Self, BudgetError> {
        NonZeroU64::new(amount).map(Self).ok_or(BudgetError::Zero)
    }

    /// The cap in currency units.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0.get()
    }

    /// The [`BUDGET_PRESETS`] as budgets, smallest first.
    #[must_use]
    pub fn presets() -> Vec<Self> {
        BUDGET_PRESETS
            .iter()
            .filter_map(|&amount| NonZeroU64::new(amount).map(Self))
            .collect()
    }
}

impl TryFrom<u64> for Budget {
    type Error = BudgetError;

    fn try_from(amount: u64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Budget> for u64 {
    fn from(budget: Budget) -> Self {
        budget.amount()
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.amount())
    }
}

/// Smallest coverage percentage accepted by the impact simulator.
pub const MIN_COVERAGE_PERCENT: u8 = 10;

/// Largest coverage percentage accepted by the impact simulator.
pub const MAX_COVERAGE_PERCENT: u8 = 100;

/// Share of a hotspot treated by a simulated intervention, in percent.
///
/// # Examples
/// ```
/// use uhi_core::CoveragePercent;
///
/// let coverage = CoveragePercent::new(50).expect("within range");
/// assert_eq!(coverage.fraction(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CoveragePercent(u8);

/// Errors returned by [`CoveragePercent::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoverageError {
    /// Percentage outside `10..=100`.
    #[error("coverage must be between 10 and 100 percent, got {0}")]
    OutOfRange(u8),
}

impl CoveragePercent {
    /// Validate and construct a coverage percentage.
    ///
    /// # Errors
    /// Returns [`CoverageError::OutOfRange`] outside `10..=100`.
    pub fn new(percent: u8) -> Result<Self, CoverageError> {
        if (MIN_COVERAGE_PERCENT..=MAX_COVERAGE_PERCENT).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(CoverageError::OutOfRange(percent))
        }
    }

    /// The percentage value.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// The percentage as a fraction in `0.1..=1.0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "percentages convert to fractions by division"
    )]
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for CoveragePercent {
    fn default() -> Self {
        Self(50)
    }
}

impl TryFrom<u8> for CoveragePercent {
    type Error = CoverageError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<CoveragePercent> for u8 {
    fn from(coverage: CoveragePercent) -> Self {
        coverage.percent()
    }
}
