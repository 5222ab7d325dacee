//! Error types for word-space-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the crate, along with the [`CoreResult<T>`] type alias.
//!
//! # Examples
//!
//! ```rust
//! use word_space_core::error::CoreError;
//!
//! let err = CoreError::BufferShapeMismatch { words: 7, values: 100 };
//! assert!(err.to_string().contains("not divisible"));
//! ```

use thiserror::Error;

use crate::axes::AxisRole;

/// Top-level error type for word-space-core operations.
///
/// Every failure mode of the launch pipeline maps to one variant, so callers
/// can distinguish fatal data-integrity problems from bad user input without
/// string matching.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Embedding buffer length is not an exact multiple of the vocabulary length.
    ///
    /// # When This Occurs
    ///
    /// - Truncated or corrupted embedding blob on disk
    /// - Vocabulary and embedding files from different builds paired together
    ///
    /// Fatal to the session: no dimensionality can be derived.
    #[error("Data integrity error: {values} embedding values are not divisible by {words} vocabulary words")]
    BufferShapeMismatch {
        /// Number of vocabulary words
        words: usize,
        /// Number of f32 values in the embedding buffer
        values: usize,
    },

    /// A vector's dimensionality does not match the store's.
    ///
    /// # When This Occurs
    ///
    /// - Axis embeddings produced by a different model than the vocabulary blob
    /// - Explicitly declared blob dimensionality disagreeing with the derived one
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality the store derives from its buffer
        expected: usize,
        /// Dimensionality actually supplied
        actual: usize,
    },

    /// An axis vector has zero magnitude, so cosine similarity against it is undefined.
    ///
    /// Rejected before projection begins; the session produces no output.
    #[error("Data integrity error: axis vector for {role} has zero magnitude")]
    ZeroMagnitudeAxis {
        /// Role of the offending axis vector
        role: AxisRole,
    },

    /// The six axis words failed validation.
    ///
    /// # When This Occurs
    ///
    /// - A word is empty (or whitespace only)
    ///
    /// Surfaced before any embedding or projection work begins.
    #[error("Invalid axis words: {reason}")]
    InvalidAxisWords {
        /// Description of the validation failure
        reason: String,
    },

    /// Vocabulary construction failed.
    ///
    /// # When This Occurs
    ///
    /// - Duplicate word in the source word list
    /// - Empty word list
    #[error("Invalid vocabulary: {reason}")]
    InvalidVocabulary {
        /// Description of the validation failure
        reason: String,
    },

    /// Configuration is invalid or failed to load.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An I/O failure while reading a vocabulary or embedding file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_shape_mismatch_display() {
        let err = CoreError::BufferShapeMismatch {
            words: 5,
            values: 12,
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("5"));
        assert!(msg.contains("not divisible"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = CoreError::DimensionMismatch {
            expected: 300,
            actual: 768,
        };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("768"));
    }

    #[test]
    fn test_zero_magnitude_axis_names_role() {
        let err = CoreError::ZeroMagnitudeAxis {
            role: AxisRole::YNeg,
        };
        assert!(err.to_string().contains("y-"));
    }
}
