//! Axis roles, axis words, and the validated six-vector axis set.
//!
//! Six user-chosen words (three opposing pairs) define the session's
//! coordinate system. The literal strings are retained for exclusion
//! filtering and beacon labeling; the vectors are supplied live by the
//! upstream embedding model and never persisted.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::store::{magnitude, VectorStore};

/// Semantic role of one axis endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisRole {
    /// Positive x endpoint
    #[serde(rename = "x+")]
    XPos,
    /// Negative x endpoint
    #[serde(rename = "x-")]
    XNeg,
    /// Positive y endpoint
    #[serde(rename = "y+")]
    YPos,
    /// Negative y endpoint
    #[serde(rename = "y-")]
    YNeg,
    /// Positive z endpoint
    #[serde(rename = "z+")]
    ZPos,
    /// Negative z endpoint
    #[serde(rename = "z-")]
    ZNeg,
}

impl AxisRole {
    /// All six roles in canonical order: x+, x-, y+, y-, z+, z-.
    pub fn all() -> [AxisRole; 6] {
        [
            AxisRole::XPos,
            AxisRole::XNeg,
            AxisRole::YPos,
            AxisRole::YNeg,
            AxisRole::ZPos,
            AxisRole::ZNeg,
        ]
    }

    /// Position of this role in the canonical order.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            AxisRole::XPos => 0,
            AxisRole::XNeg => 1,
            AxisRole::YPos => 2,
            AxisRole::YNeg => 3,
            AxisRole::ZPos => 4,
            AxisRole::ZNeg => 5,
        }
    }

    /// Short display name: "x+", "x-", ...
    pub fn as_str(self) -> &'static str {
        match self {
            AxisRole::XPos => "x+",
            AxisRole::XNeg => "x-",
            AxisRole::YPos => "y+",
            AxisRole::YNeg => "y-",
            AxisRole::ZPos => "z+",
            AxisRole::ZNeg => "z-",
        }
    }
}

impl std::fmt::Display for AxisRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six literal axis words, in canonical role order.
///
/// Duplicates across roles are legal: a word may occupy more than one
/// endpoint, which degenerates that axis but is the user's choice to make.
/// Serialize-only; rebuild through [`AxisWords::new`] so the non-empty
/// invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisWords {
    words: [String; 6],
}

impl AxisWords {
    /// Validate and build the six axis words.
    ///
    /// Words are trimmed; an empty word after trimming is rejected. No
    /// deduplication is performed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAxisWords`] naming the offending role.
    pub fn new<S: AsRef<str>>(words: [S; 6]) -> CoreResult<Self> {
        let mut out: [String; 6] = Default::default();
        for (role, raw) in AxisRole::all().iter().zip(words.iter()) {
            let trimmed = raw.as_ref().trim();
            if trimmed.is_empty() {
                return Err(CoreError::InvalidAxisWords {
                    reason: format!("word for {} is empty", role),
                });
            }
            out[role.index()] = trimmed.to_string();
        }
        Ok(Self { words: out })
    }

    /// Word for the given role.
    #[inline]
    pub fn word(&self, role: AxisRole) -> &str {
        &self.words[role.index()]
    }

    /// Iterate (role, word) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (AxisRole, &str)> {
        AxisRole::all()
            .into_iter()
            .map(move |role| (role, self.word(role)))
    }

    /// True if `candidate` equals any of the six literal words.
    pub fn contains(&self, candidate: &str) -> bool {
        self.words.iter().any(|w| w == candidate)
    }
}

/// Validated axis set: six embedding vectors keyed by role, plus the words.
///
/// Construction fails fast on dimensionality mismatch against the store and
/// on zero-magnitude vectors, so the projection stage never sees an axis it
/// cannot take a cosine against.
#[derive(Debug, Clone)]
pub struct AxisSet {
    words: AxisWords,
    vectors: [Vec<f32>; 6],
}

impl AxisSet {
    /// Build an axis set from six vectors in canonical role order.
    ///
    /// # Errors
    ///
    /// - [`CoreError::DimensionMismatch`] if any vector's length differs from
    ///   the store's dimensionality.
    /// - [`CoreError::ZeroMagnitudeAxis`] if any vector has zero magnitude.
    pub fn new(words: AxisWords, vectors: [Vec<f32>; 6], store: &VectorStore) -> CoreResult<Self> {
        for (role, vector) in AxisRole::all().iter().zip(vectors.iter()) {
            if vector.len() != store.dim() {
                return Err(CoreError::DimensionMismatch {
                    expected: store.dim(),
                    actual: vector.len(),
                });
            }
            if magnitude(vector) == 0.0 {
                return Err(CoreError::ZeroMagnitudeAxis { role: *role });
            }
        }
        Ok(Self { words, vectors })
    }

    /// The literal axis words.
    #[inline]
    pub fn words(&self) -> &AxisWords {
        &self.words
    }

    /// Embedding vector for the given role.
    #[inline]
    pub fn vector(&self, role: AxisRole) -> &[f32] {
        &self.vectors[role.index()]
    }
}
