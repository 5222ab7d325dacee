//! Loading the vocabulary + embedding blob produced offline.
//!
//! The on-disk pairing is a newline-delimited UTF-8 word list and a raw
//! little-endian f32 buffer, row-major, one row per word. Dimensionality is
//! declared explicitly by the caller where known; the length-divisibility
//! check remains as a sanity assertion either way, so a truncated or
//! mismatched pair of files can never become a store.

use std::path::Path;

use tracing::info;

use crate::error::{CoreError, CoreResult};
use crate::store::VectorStore;
use crate::vocab::Vocabulary;

fn io_err(path: &Path, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read a newline-delimited word list. Blank lines are ignored, interior
/// whitespace is preserved.
pub fn read_word_list(path: &Path) -> CoreResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect())
}

/// Read a raw little-endian f32 buffer.
pub fn read_f32_buffer(path: &Path) -> CoreResult<Vec<f32>> {
    let bytes = std::fs::read(path).map_err(|e| io_err(path, e))?;
    if bytes.len() % 4 != 0 {
        return Err(CoreError::SerializationError(format!(
            "embedding file {} has {} bytes, not a multiple of 4",
            path.display(),
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Load a vector store from a word-list file and an embedding file.
///
/// When `declared_dim` is given, the dimensionality derived from the buffer
/// must agree with it exactly.
///
/// # Errors
///
/// - [`CoreError::Io`] for unreadable files.
/// - [`CoreError::InvalidVocabulary`] for duplicate or missing words.
/// - [`CoreError::BufferShapeMismatch`] if the value count is not an exact
///   multiple of the word count.
/// - [`CoreError::DimensionMismatch`] if the derived dimensionality differs
///   from `declared_dim`.
pub fn load_store(
    words_path: &Path,
    vectors_path: &Path,
    declared_dim: Option<usize>,
) -> CoreResult<VectorStore> {
    let words = read_word_list(words_path)?;
    let data = read_f32_buffer(vectors_path)?;

    let vocab = Vocabulary::new(words)?;
    let store = VectorStore::from_parts(vocab, data)?;

    if let Some(declared) = declared_dim {
        if declared != store.dim() {
            return Err(CoreError::DimensionMismatch {
                expected: declared,
                actual: store.dim(),
            });
        }
    }

    info!(
        words = store.len(),
        dim = store.dim(),
        "embedding blob loaded"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_blob(words: &[&str], values: &[f32]) -> (tempfile::TempDir, std::path::PathBuf, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let words_path = dir.path().join("words.txt");
        let vectors_path = dir.path().join("vectors.bin");

        std::fs::write(&words_path, words.join("\n")).unwrap();

        let mut f = std::fs::File::create(&vectors_path).unwrap();
        for v in values {
            f.write_all(&v.to_le_bytes()).unwrap();
        }

        (dir, words_path, vectors_path)
    }

    #[test]
    fn test_load_reports_derived_dimensionality() {
        let (_dir, words, vectors) =
            write_blob(&["cat", "dog"], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let store = load_store(&words, &vectors, None).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.dim(), 3);
        assert_eq!(store.vector(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_indivisible_blob_fails() {
        let (_dir, words, vectors) = write_blob(&["cat", "dog"], &[1.0, 2.0, 3.0]);
        let result = load_store(&words, &vectors, None);
        assert!(matches!(
            result,
            Err(CoreError::BufferShapeMismatch {
                words: 2,
                values: 3
            })
        ));
    }

    #[test]
    fn test_declared_dim_cross_checked() {
        let (_dir, words, vectors) = write_blob(&["cat", "dog"], &[1.0, 2.0, 3.0, 4.0]);
        let result = load_store(&words, &vectors, Some(300));
        assert!(matches!(
            result,
            Err(CoreError::DimensionMismatch {
                expected: 300,
                actual: 2
            })
        ));
        assert!(load_store(&words, &vectors, Some(2)).is_ok());
    }

    #[test]
    fn test_blank_lines_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let words_path = dir.path().join("words.txt");
        std::fs::write(&words_path, "cat\n\ndog\n").unwrap();
        let words = read_word_list(&words_path).unwrap();
        assert_eq!(words, vec!["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_truncated_byte_stream_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.bin");
        std::fs::write(&path, [0u8; 6]).unwrap();
        assert!(matches!(
            read_f32_buffer(&path),
            Err(CoreError::SerializationError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.txt");
        assert!(matches!(
            read_word_list(&missing),
            Err(CoreError::Io { .. })
        ));
    }
}
