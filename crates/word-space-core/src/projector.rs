//! Axis projection: mapping one embedding row to a raw 3D coordinate.
//!
//! Each component is the difference of two cosine similarities, one per axis
//! endpoint, so it lies in [-2, 2] in theory and is typically much smaller.
//! The function is pure and stateless; the selector calls it in parallel
//! across the whole vocabulary.

use serde::{Deserialize, Serialize};

use crate::axes::{AxisRole, AxisSet};
use crate::store::cosine;

/// Unnormalized projection of one word onto the three user axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCoord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RawCoord {
    /// Euclidean norm: the word's relevance magnitude for selection ranking.
    #[inline]
    pub fn relevance(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Component along one of the three axes (endpoint sign is ignored).
    #[inline]
    pub fn component(&self, role: AxisRole) -> f32 {
        match role {
            AxisRole::XPos | AxisRole::XNeg => self.x,
            AxisRole::YPos | AxisRole::YNeg => self.y,
            AxisRole::ZPos | AxisRole::ZNeg => self.z,
        }
    }
}

/// Project one word vector through the six-axis set.
///
/// ```text
/// x = cos(w, x+) - cos(w, x-)
/// y = cos(w, y+) - cos(w, y-)
/// z = cos(w, z+) - cos(w, z-)
/// ```
pub fn project(word: &[f32], axes: &AxisSet) -> RawCoord {
    RawCoord {
        x: cosine(word, axes.vector(AxisRole::XPos)) - cosine(word, axes.vector(AxisRole::XNeg)),
        y: cosine(word, axes.vector(AxisRole::YPos)) - cosine(word, axes.vector(AxisRole::YNeg)),
        z: cosine(word, axes.vector(AxisRole::ZPos)) - cosine(word, axes.vector(AxisRole::ZNeg)),
    }
}
