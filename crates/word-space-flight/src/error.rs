//! Error types for word-space-flight.

use thiserror::Error;

/// Failures building or querying a flight index.
#[derive(Debug, Error)]
pub enum FlightError {
    /// LOD thresholds are not strictly increasing or otherwise invalid.
    #[error("Invalid LOD configuration: {0}")]
    InvalidLodConfig(String),
}

/// Result type alias for flight operations.
pub type FlightResult<T> = Result<T, FlightError>;
