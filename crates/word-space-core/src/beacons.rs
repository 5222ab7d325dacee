//! Beacon placement: six navigational landmarks at the axis frontiers.
//!
//! Each beacon sits at 1.2× the extreme coordinate any projected word
//! reaches on its axis direction, and at 0 on the other two axes: just
//! beyond the outermost real word, always reachable, never inside the cloud.

use serde::{Deserialize, Serialize};

use crate::axes::{AxisRole, AxisWords};
use crate::normalizer::ProjectedWord;

/// Multiplier pushing a beacon past the outermost word on its axis.
const FRONTIER_FACTOR: f32 = 1.2;

/// One labeled landmark at an axis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beacon {
    pub word: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub role: AxisRole,
}

/// Place the six beacons from the actual extent of the projected cloud.
///
/// Extrema start at 0, so a side of an axis that no word reaches keeps its
/// beacon at the origin plane rather than collapsing to some default.
pub fn place_beacons(words: &AxisWords, projected: &[ProjectedWord]) -> [Beacon; 6] {
    let mut max_x = 0.0_f32;
    let mut min_x = 0.0_f32;
    let mut max_y = 0.0_f32;
    let mut min_y = 0.0_f32;
    let mut max_z = 0.0_f32;
    let mut min_z = 0.0_f32;

    for w in projected {
        max_x = max_x.max(w.x);
        min_x = min_x.min(w.x);
        max_y = max_y.max(w.y);
        min_y = min_y.min(w.y);
        max_z = max_z.max(w.z);
        min_z = min_z.min(w.z);
    }

    let beacon = |role: AxisRole, x: f32, y: f32, z: f32| Beacon {
        word: words.word(role).to_string(),
        x: x * FRONTIER_FACTOR,
        y: y * FRONTIER_FACTOR,
        z: z * FRONTIER_FACTOR,
        role,
    };

    [
        beacon(AxisRole::XPos, max_x, 0.0, 0.0),
        beacon(AxisRole::XNeg, min_x, 0.0, 0.0),
        beacon(AxisRole::YPos, 0.0, max_y, 0.0),
        beacon(AxisRole::YNeg, 0.0, min_y, 0.0),
        beacon(AxisRole::ZPos, 0.0, 0.0, max_z),
        beacon(AxisRole::ZNeg, 0.0, 0.0, min_z),
    ]
}
