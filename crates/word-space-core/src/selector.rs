//! Relevance selection: ranking the vocabulary against the chosen axes.
//!
//! Scoring is a pure transformation from (store, axes) to per-word relevance
//! magnitudes, run in parallel across the vocabulary. Words that fail the
//! quality filter, or that are one of the six literal axis words, receive a
//! sentinel score of `f32::NEG_INFINITY` and can never reach the output
//! regardless of their true geometric relevance.
//!
//! Progress and diagnostics go through [`SelectionObserver`] rather than
//! being inlined in the scoring loop, so the scoring itself stays pure and
//! unit-testable.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::axes::AxisSet;
use crate::config::SelectionConfig;
use crate::projector::{project, RawCoord};
use crate::store::VectorStore;

/// One vocabulary word that survived selection.
#[derive(Debug, Clone, Copy)]
pub struct ScoredWord {
    /// Vocabulary index (rank) of the word.
    pub index: usize,
    /// Raw axis projection, kept for the normalizer.
    pub raw: RawCoord,
    /// Relevance magnitude: Euclidean norm of the raw projection.
    pub relevance: f32,
}

/// Counters describing one selection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStats {
    /// Vocabulary words scored (the whole vocabulary).
    pub scored: usize,
    /// Words that passed the quality filter and axis-word exclusion.
    pub eligible: usize,
    /// The `top_k` cap this run was asked for.
    pub requested: usize,
    /// Words returned.
    pub selected: usize,
    /// True when the eligible set was cut down to `top_k`.
    pub truncated: bool,
}

impl SelectionStats {
    /// True when fewer words passed the filter than `top_k` asked for.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.selected < self.requested
    }
}

/// Observer for selection progress and outcomes.
///
/// The default methods do nothing, so implementations override only what
/// they need. The scoring sweep never calls an observer per word.
pub trait SelectionObserver: Sync {
    /// Called once before the scoring sweep starts.
    fn scoring_started(&self, _vocabulary: usize) {}

    /// Called once with the final counters.
    fn selection_complete(&self, _stats: &SelectionStats) {}
}

/// Observer that discards all events.
pub struct NullObserver;

impl SelectionObserver for NullObserver {}

/// Observer that reports through `tracing`.
pub struct TracingObserver;

impl SelectionObserver for TracingObserver {
    fn scoring_started(&self, vocabulary: usize) {
        debug!(vocabulary, "scoring vocabulary against axis set");
    }

    fn selection_complete(&self, stats: &SelectionStats) {
        debug!(
            eligible = stats.eligible,
            selected = stats.selected,
            truncated = stats.truncated,
            "selection complete"
        );
        if stats.is_degenerate() {
            warn!(
                eligible = stats.eligible,
                requested = stats.requested,
                "fewer eligible words than requested; proceeding with the smaller set"
            );
        }
    }
}

/// Quality filter: 3–15 lowercase ASCII letters, nothing else.
///
/// A fixed pattern rather than a blocklist: it deterministically drops
/// numerals, punctuation, hyphens, mixed case (proper nouns, abbreviations),
/// and very short or very long tokens.
pub fn is_quality_word(word: &str, min_len: usize, max_len: usize) -> bool {
    let len = word.len();
    len >= min_len && len <= max_len && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Score the vocabulary and return at most `top_k` words by descending
/// relevance magnitude.
///
/// Ties order by ascending vocabulary index, so repeated calls with
/// identical input produce identical output. Returns `(selected, stats)`;
/// fewer than `top_k` eligible words is not an error.
pub fn select(
    store: &VectorStore,
    axes: &AxisSet,
    config: &SelectionConfig,
    observer: &dyn SelectionObserver,
) -> (Vec<ScoredWord>, SelectionStats) {
    observer.scoring_started(store.len());

    let min_len = config.min_word_len;
    let max_len = config.max_word_len;

    // Pure parallel sweep: ineligible words carry the sentinel score.
    let scored: Vec<(usize, RawCoord, f32)> = (0..store.len())
        .into_par_iter()
        .map(|index| {
            let word = store.vocab().word(index).unwrap_or("");
            if !is_quality_word(word, min_len, max_len) || axes.words().contains(word) {
                return (
                    index,
                    RawCoord {
                        x: 0.0,
                        y: 0.0,
                        z: 0.0,
                    },
                    f32::NEG_INFINITY,
                );
            }
            let raw = project(store.vector(index), axes);
            (index, raw, raw.relevance())
        })
        .collect();

    let mut eligible: Vec<ScoredWord> = scored
        .into_iter()
        .filter(|(_, _, score)| score.is_finite())
        .map(|(index, raw, relevance)| ScoredWord {
            index,
            raw,
            relevance,
        })
        .collect();

    let eligible_count = eligible.len();

    eligible.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.index.cmp(&b.index))
    });
    eligible.truncate(config.top_k);

    let stats = SelectionStats {
        scored: store.len(),
        eligible: eligible_count,
        requested: config.top_k,
        selected: eligible.len(),
        truncated: eligible_count > config.top_k,
    };
    observer.selection_complete(&stats);

    (eligible, stats)
}
