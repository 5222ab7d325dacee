//! The axis input file: six words plus their live embeddings.
//!
//! Produced by the external feature-extraction step that embeds the user's
//! six literal words; consumed here to build a validated [`AxisSet`].
//!
//! Format (JSON):
//!
//! ```json
//! {
//!   "words":   ["big", "small", "hot", "cold", "old", "new"],
//!   "vectors": [[0.1, ...], [0.2, ...], ...]
//! }
//! ```
//!
//! Words and vectors are in canonical role order: x+, x-, y+, y-, z+, z-.

use std::path::Path;

use serde::{Deserialize, Serialize};

use word_space_core::axes::{AxisSet, AxisWords};
use word_space_core::store::VectorStore;

use crate::error::{CliError, CliResult};

/// Serialized form of a six-word axis submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct AxisFile {
    pub words: [String; 6],
    pub vectors: [Vec<f32>; 6],
}

impl AxisFile {
    /// Read and parse an axis file.
    pub fn read(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| CliError::InvalidAxisFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Validate against the store and build the axis set.
    pub fn into_axis_set(self, store: &VectorStore) -> CliResult<AxisSet> {
        let words = AxisWords::new(self.words)?;
        Ok(AxisSet::new(words, self.vectors, store)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_space_core::vocab::Vocabulary;

    #[test]
    fn test_round_trip_and_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("axes.json");

        let file = AxisFile {
            words: [
                "big".into(),
                "small".into(),
                "hot".into(),
                "cold".into(),
                "old".into(),
                "new".into(),
            ],
            vectors: [
                vec![1.0, 0.0],
                vec![-1.0, 0.0],
                vec![0.0, 1.0],
                vec![0.0, -1.0],
                vec![0.7, 0.7],
                vec![-0.7, -0.7],
            ],
        };
        std::fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

        let store = VectorStore::from_parts(
            Vocabulary::new(vec!["cat".into()]).unwrap(),
            vec![0.5, 0.5],
        )
        .unwrap();

        let parsed = AxisFile::read(&path).unwrap();
        let axes = parsed.into_axis_set(&store).unwrap();
        assert_eq!(axes.words().word(word_space_core::axes::AxisRole::XPos), "big");
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("axes.json");
        std::fs::write(&path, "{\"words\": []}").unwrap();
        assert!(matches!(
            AxisFile::read(&path),
            Err(CliError::InvalidAxisFile { .. })
        ));
    }
}
