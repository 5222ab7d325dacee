//! The per-session proximity/LOD index.
//!
//! Holds the projected word set in flat arrays and answers the two queries
//! the render loop needs: a full visibility pass every frame, and an
//! intermittent k-nearest lookup. At the session's bounded scale (≤ 7000
//! words) both are linear scans; a spatial structure could be layered behind
//! the same two contracts without changing them.

use tracing::debug;

use word_space_core::config::LodConfig;
use word_space_core::normalizer::ProjectedWord;

use crate::error::{FlightError, FlightResult};
use crate::lod::{classify, opacity, VisibilityBand};

/// One entry of a nearest-word query result.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<'a> {
    /// Index into the session's projected word list.
    pub index: usize,
    pub word: &'a str,
    pub distance: f32,
}

/// Proximity/LOD index over one session's projected words.
///
/// Built once per session; rebuilt wholesale when a new axis set produces a
/// new selection. The visibility pass writes into storage allocated at build
/// time, so steady-state frames allocate nothing.
#[derive(Debug)]
pub struct FlightIndex {
    words: Vec<String>,
    positions: Vec<[f32; 3]>,
    bands: Vec<VisibilityBand>,
    opacities: Vec<f32>,
    config: LodConfig,
}

impl FlightIndex {
    /// Build an index over a session's projected words.
    ///
    /// # Errors
    ///
    /// Returns [`FlightError::InvalidLodConfig`] when the thresholds are not
    /// strictly increasing or the opacity ceiling is out of range.
    pub fn build(projected: &[ProjectedWord], config: LodConfig) -> FlightResult<Self> {
        config
            .validate()
            .map_err(|e| FlightError::InvalidLodConfig(e.to_string()))?;

        let words = projected.iter().map(|w| w.word.clone()).collect();
        let positions = projected.iter().map(|w| [w.x, w.y, w.z]).collect();

        debug!(words = projected.len(), "flight index built");

        Ok(Self {
            words,
            positions,
            bands: vec![VisibilityBand::Culled; projected.len()],
            opacities: vec![0.0; projected.len()],
            config,
        })
    }

    /// Number of indexed words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the index holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at the given index.
    #[inline]
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Band computed by the most recent visibility pass.
    #[inline]
    pub fn band(&self, index: usize) -> VisibilityBand {
        self.bands[index]
    }

    /// Opacity computed by the most recent visibility pass.
    #[inline]
    pub fn opacity(&self, index: usize) -> f32 {
        self.opacities[index]
    }

    /// Reclassify every word against a viewer position snapshot.
    ///
    /// One linear pass, no allocation; meant to run once per rendered frame.
    pub fn update_visibility(&mut self, viewer: [f32; 3]) {
        for i in 0..self.positions.len() {
            let d = distance(viewer, self.positions[i]);
            self.bands[i] = classify(d, &self.config);
            self.opacities[i] = opacity(d, &self.config);
        }
    }

    /// The `k` currently-visible words closest to the viewer, ascending by
    /// distance.
    ///
    /// Visibility comes from the most recent [`update_visibility`] pass
    /// (opacity strictly above zero); distances are measured against the
    /// position snapshot passed here. Returns fewer than `k` entries when
    /// fewer visible words exist. Ties order by word index.
    ///
    /// [`update_visibility`]: Self::update_visibility
    pub fn nearest(&self, viewer: [f32; 3], k: usize) -> Vec<Neighbor<'_>> {
        let mut candidates: Vec<(usize, f32)> = self
            .opacities
            .iter()
            .enumerate()
            .filter(|(_, o)| **o > 0.0)
            .map(|(i, _)| (i, distance(viewer, self.positions[i])))
            .collect();

        let by_distance = |a: &(usize, f32), b: &(usize, f32)| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        };

        // Partial sort: only the leading k entries need ordering.
        if candidates.len() > k && k > 0 {
            candidates.select_nth_unstable_by(k - 1, by_distance);
            candidates.truncate(k);
        }
        candidates.sort_by(by_distance);
        candidates.truncate(k);

        candidates
            .into_iter()
            .map(|(index, distance)| Neighbor {
                index,
                word: &self.words[index],
                distance,
            })
            .collect()
    }
}

#[inline]
fn distance(a: [f32; 3], b: [f32; 3]) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
