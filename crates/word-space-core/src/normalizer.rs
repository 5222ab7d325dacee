//! Space normalization: from raw axis coordinates to final world positions.
//!
//! Raw cosine-difference values have wildly different spreads depending on
//! which axis words the user picked. Dividing each axis by its population
//! standard deviation over the selected set puts all three axes in a
//! comparable visual range before the world-scale factor is applied.
//!
//! A word's magnitude is measured in standard-deviation units, before the
//! scale factor, so LOD and visual-emphasis decisions stay stable when the
//! world scale changes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::NormalizationConfig;
use crate::selector::ScoredWord;
use crate::vocab::Vocabulary;

/// One word placed in the session's normalized 3D space.
///
/// Immutable after creation; recomputed wholesale per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedWord {
    pub word: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euclidean norm of the pre-scale axis ratios, in std-dev units.
    pub magnitude: f32,
}

/// Axis-aligned bounding box of a session's projected words.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl SessionBounds {
    /// Bounds collapsed to the origin, the starting point for accumulation.
    pub fn zero() -> Self {
        Self {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
            min_z: 0.0,
            max_z: 0.0,
        }
    }

    fn extend(&mut self, x: f32, y: f32, z: f32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
    }
}

/// Per-axis spread of the selected set, as used for normalization.
#[derive(Debug, Clone, Copy)]
pub struct AxisSpread {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Population standard deviation per axis across the selected words.
///
/// Deterministic two-pass mean/variance; an axis on which every selected
/// word coincides gets a deviation of 1.0 so the division below is always
/// defined.
pub fn axis_spread(selected: &[ScoredWord]) -> AxisSpread {
    let n = selected.len() as f64;
    if selected.is_empty() {
        return AxisSpread {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        };
    }

    let mut mean = [0.0_f64; 3];
    for s in selected {
        mean[0] += s.raw.x as f64;
        mean[1] += s.raw.y as f64;
        mean[2] += s.raw.z as f64;
    }
    for m in &mut mean {
        *m /= n;
    }

    let mut var = [0.0_f64; 3];
    for s in selected {
        let d = [
            s.raw.x as f64 - mean[0],
            s.raw.y as f64 - mean[1],
            s.raw.z as f64 - mean[2],
        ];
        var[0] += d[0] * d[0];
        var[1] += d[1] * d[1];
        var[2] += d[2] * d[2];
    }

    let std = |v: f64| {
        let s = (v / n).sqrt() as f32;
        if s == 0.0 {
            1.0
        } else {
            s
        }
    };

    AxisSpread {
        x: std(var[0]),
        y: std(var[1]),
        z: std(var[2]),
    }
}

/// Normalize the selected set into final positions, magnitudes, and bounds.
///
/// Each position is `(raw / axis_std_dev) * scale_factor`; each magnitude is
/// the norm of the three unscaled ratios. Bounds cover the final positions
/// of this selection only.
pub fn normalize(
    selected: &[ScoredWord],
    vocab: &Vocabulary,
    config: &NormalizationConfig,
) -> (Vec<ProjectedWord>, SessionBounds) {
    let spread = axis_spread(selected);
    let scale = config.scale_factor;
    debug!(
        std_x = spread.x,
        std_y = spread.y,
        std_z = spread.z,
        scale,
        "normalizing selected set"
    );

    let mut bounds = SessionBounds::zero();
    let words = selected
        .iter()
        .map(|s| {
            let rx = s.raw.x / spread.x;
            let ry = s.raw.y / spread.y;
            let rz = s.raw.z / spread.z;
            let (x, y, z) = (rx * scale, ry * scale, rz * scale);
            bounds.extend(x, y, z);
            ProjectedWord {
                word: vocab
                    .word(s.index)
                    .unwrap_or_default()
                    .to_string(),
                x,
                y,
                z,
                magnitude: (rx * rx + ry * ry + rz * rz).sqrt(),
            }
        })
        .collect();

    (words, bounds)
}
