//! CLI error type wrapping the engine's failure modes.

use thiserror::Error;

/// Any failure a CLI command can surface.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] word_space_core::error::CoreError),

    #[error(transparent)]
    Flight(#[from] word_space_flight::error::FlightError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid axis file {path}: {reason}")]
    InvalidAxisFile { path: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
