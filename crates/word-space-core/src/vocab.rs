//! Vocabulary: the ordered word list backing a vector store.
//!
//! Word order is significant: insertion order is the frequency rank from the
//! source corpus, and row `i` of the embedding matrix belongs to word `i`.
//! The vocabulary is immutable after construction.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// Ordered, unique word list with O(1) word→index lookup.
///
/// Serializes as its word list only; rebuild through [`Vocabulary::new`] so
/// the lookup map and uniqueness invariant always hold.
#[derive(Debug, Clone, Serialize)]
pub struct Vocabulary {
    words: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from an ordered word list.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidVocabulary`] if the list is empty or
    /// contains a duplicate word.
    pub fn new(words: Vec<String>) -> CoreResult<Self> {
        if words.is_empty() {
            return Err(CoreError::InvalidVocabulary {
                reason: "word list is empty".to_string(),
            });
        }

        let mut index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.clone(), i).is_some() {
                return Err(CoreError::InvalidVocabulary {
                    reason: format!("duplicate word {:?} at rank {}", word, i),
                });
            }
        }

        Ok(Self { words, index })
    }

    /// Number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the vocabulary holds no words. Construction rejects empty
    /// word lists, so this is always false for a validated vocabulary.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at the given rank.
    #[inline]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Rank of the given word, if present.
    #[inline]
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Iterate words in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vocabulary {
        Vocabulary::new(vec!["the".into(), "cat".into(), "sat".into()]).unwrap()
    }

    #[test]
    fn test_rank_order_preserved() {
        let v = sample();
        assert_eq!(v.len(), 3);
        assert_eq!(v.word(0), Some("the"));
        assert_eq!(v.word(2), Some("sat"));
        assert_eq!(v.word(3), None);
    }

    #[test]
    fn test_index_lookup() {
        let v = sample();
        assert_eq!(v.index_of("cat"), Some(1));
        assert_eq!(v.index_of("dog"), None);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = Vocabulary::new(vec!["cat".into(), "cat".into()]);
        assert!(matches!(
            result,
            Err(CoreError::InvalidVocabulary { .. })
        ));
    }

    #[test]
    fn test_empty_rejected() {
        let result = Vocabulary::new(Vec::new());
        assert!(matches!(
            result,
            Err(CoreError::InvalidVocabulary { .. })
        ));
    }
}
