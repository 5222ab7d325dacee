//! Word-Space Flight Library
//!
//! Per-frame query side of a word-space session: visibility banding with
//! continuous opacity, and k-nearest lookups, both against the projected
//! word set produced by `word-space-core`.
//!
//! The [`FlightIndex`] is rebuilt wholesale whenever a new axis set produces
//! a new selection; it has no incremental update path and no state beyond
//! "built for this session".
//!
//! # Example
//!
//! ```
//! use word_space_core::config::LodConfig;
//! use word_space_core::normalizer::ProjectedWord;
//! use word_space_flight::FlightIndex;
//!
//! let words = vec![ProjectedWord {
//!     word: "cat".into(), x: 0.0, y: 0.0, z: 100.0, magnitude: 1.0,
//! }];
//! let mut index = FlightIndex::build(&words, LodConfig::default()).unwrap();
//!
//! index.update_visibility([0.0, 0.0, 0.0]);
//! assert!(index.opacity(0) > 0.0);  // distance 100 is in the full band
//!
//! let nearby = index.nearest([0.0, 0.0, 0.0], 5);
//! assert_eq!(nearby[0].word, "cat");
//! ```

pub mod error;
pub mod index;
pub mod lod;

pub use error::{FlightError, FlightResult};
pub use index::{FlightIndex, Neighbor};
pub use lod::VisibilityBand;
