//! Error types raised by the recommender.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised while simulating a partial rollout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The requested intervention kind is not in the catalogue.
    #[error("intervention `{kind}` is not in the catalogue")]
    UnknownIntervention {
        /// Kind that was requested.
        kind: String,
    },
}
