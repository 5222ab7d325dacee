//! Session orchestration: one launch per six-word submission.
//!
//! A [`WordSpaceSession`] is an immutable value holding everything the
//! presentation layer needs: the projected words, the six beacons, the
//! session bounds, and the selection counters. Launching with a new axis set
//! builds a fresh session; callers replace the old one wholesale. Even one
//! differing axis invalidates every word's coordinates, so there is no
//! partial-reuse path.

use std::time::Instant;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::axes::{AxisSet, AxisWords};
use crate::beacons::{place_beacons, Beacon};
use crate::config::EngineConfig;
use crate::error::CoreResult;
use crate::normalizer::{normalize, ProjectedWord, SessionBounds};
use crate::selector::{select, SelectionObserver, SelectionStats, TracingObserver};
use crate::store::VectorStore;

/// One fully computed word-space session.
#[derive(Debug, Clone, Serialize)]
pub struct WordSpaceSession {
    id: Uuid,
    axis_words: AxisWords,
    words: Vec<ProjectedWord>,
    beacons: [Beacon; 6],
    bounds: SessionBounds,
    stats: SelectionStats,
}

impl WordSpaceSession {
    /// Run the full pipeline: select, normalize, place beacons, bound.
    ///
    /// All-or-nothing: any validation failure returns an error before any
    /// output exists. Selection progress is reported through `tracing`.
    pub fn launch(store: &VectorStore, axes: AxisSet, config: &EngineConfig) -> CoreResult<Self> {
        Self::launch_with_observer(store, axes, config, &TracingObserver)
    }

    /// [`launch`](Self::launch) with a caller-supplied selection observer.
    pub fn launch_with_observer(
        store: &VectorStore,
        axes: AxisSet,
        config: &EngineConfig,
        observer: &dyn SelectionObserver,
    ) -> CoreResult<Self> {
        config.validate()?;

        let started = Instant::now();
        let (selected, stats) = select(store, &axes, &config.selection, observer);
        let (words, bounds) = normalize(&selected, store.vocab(), &config.normalization);
        let beacons = place_beacons(axes.words(), &words);

        let session = Self {
            id: Uuid::new_v4(),
            axis_words: axes.words().clone(),
            words,
            beacons,
            bounds,
            stats,
        };

        info!(
            session = %session.id,
            selected = stats.selected,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "word-space session launched"
        );

        Ok(session)
    }

    /// Unique id of this session.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The six literal axis words that define this session's space.
    #[inline]
    pub fn axis_words(&self) -> &AxisWords {
        &self.axis_words
    }

    /// Projected words in descending relevance order.
    #[inline]
    pub fn words(&self) -> &[ProjectedWord] {
        &self.words
    }

    /// The six beacons, in canonical role order.
    #[inline]
    pub fn beacons(&self) -> &[Beacon; 6] {
        &self.beacons
    }

    /// Bounding box of this session's projected words.
    #[inline]
    pub fn bounds(&self) -> SessionBounds {
        self.bounds
    }

    /// Selection counters for diagnostics.
    #[inline]
    pub fn stats(&self) -> SelectionStats {
        self.stats
    }
}
