//! Word-Space Core Library
//!
//! Projects a word-embedding vocabulary into a personal 3D coordinate system
//! defined by six user-chosen axis words (three opposing pairs), and selects a
//! bounded working set of words for interactive navigation.
//!
//! # Architecture
//!
//! The launch pipeline runs once per six-word submission:
//!
//! 1. [`VectorStore`]: flat embedding matrix with zero-copy row access
//! 2. [`projector`]: raw 3-axis coordinates from cosine-similarity differences
//! 3. [`selector`]: relevance-ranked, quality-filtered top-K index set
//! 4. [`normalizer`]: per-axis spread normalization into final positions
//! 5. [`beacons`]: six axis-endpoint landmarks derived from the cloud extent
//!
//! [`session::WordSpaceSession::launch`] orchestrates the pipeline and owns
//! its outputs for the lifetime of the session. Per-frame proximity/LOD
//! queries over the projected set live in the `word-space-flight` crate.
//!
//! # Example
//!
//! ```
//! use word_space_core::axes::{AxisSet, AxisWords};
//! use word_space_core::config::EngineConfig;
//! use word_space_core::session::WordSpaceSession;
//! use word_space_core::store::VectorStore;
//! use word_space_core::vocab::Vocabulary;
//!
//! let vocab = Vocabulary::new(vec!["love".into(), "hate".into(), "cat".into()]).unwrap();
//! let store = VectorStore::from_parts(vocab, vec![
//!     1.0, 0.0,
//!     -1.0, 0.0,
//!     0.6, 0.4,
//! ]).unwrap();
//!
//! let words = AxisWords::new(["love", "hate", "up", "down", "near", "far"]).unwrap();
//! let axes = AxisSet::new(words, [
//!     vec![1.0, 0.0], vec![-1.0, 0.0],
//!     vec![0.0, 1.0], vec![0.0, -1.0],
//!     vec![0.5, 0.5], vec![-0.5, -0.5],
//! ], &store).unwrap();
//!
//! let session = WordSpaceSession::launch(&store, axes, &EngineConfig::default()).unwrap();
//! assert!(session.words().len() <= 1);  // "cat" is the only non-axis word
//! ```

pub mod axes;
pub mod beacons;
pub mod blob;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod projector;
pub mod selector;
pub mod session;
pub mod store;
pub mod vocab;

pub use axes::{AxisRole, AxisSet, AxisWords};
pub use beacons::Beacon;
pub use config::EngineConfig;
pub use error::{CoreError, CoreResult};
pub use normalizer::{ProjectedWord, SessionBounds};
pub use session::WordSpaceSession;
pub use store::VectorStore;
pub use vocab::Vocabulary;
