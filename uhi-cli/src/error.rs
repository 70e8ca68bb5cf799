//! Error types emitted by the `uhi` CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use uhi_core::{BudgetError, CoverageError};
use uhi_recommender::SimulationError;

/// Errors emitted by the `uhi` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Both a reference hotspot id and a hotspot file were supplied.
    #[error("set only one of --{id_field} or --{file_field}")]
    ConflictingHotspotSources {
        id_field: &'static str,
        file_field: &'static str,
    },
    /// No reference hotspot carries the requested id.
    #[error("no reference hotspot has id {id} (run `uhi hotspots` to list them)")]
    UnknownHotspot { id: u32 },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening a JSON input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A JSON input file could not be decoded or failed validation.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The budget was rejected.
    #[error("invalid budget: {0}")]
    InvalidBudget(#[from] BudgetError),
    /// The coverage percentage was rejected.
    #[error("invalid coverage: {0}")]
    InvalidCoverage(#[from] CoverageError),
    /// The simulator rejected the request.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
