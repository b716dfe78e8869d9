//! Deduplication state for a filtering run
//!
//! Two in-memory structures track what has already been admitted:
//! - `SeenWords`: every word admitted to output
//! - `EncodingClaims`: short encodings and the word that claimed each one
//!
//! Both start empty and live for exactly one run.

use ahash::RandomState;
use hashbrown::{HashMap, HashSet};

/// Set of words already admitted to output
#[derive(Debug, Default)]
pub struct SeenWords {
    set: HashSet<String, RandomState>,
}

impl SeenWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word; returns true if it was not seen before
    pub fn insert(&mut self, word: &str) -> bool {
        if self.set.contains(word) {
            return false;
        }
        self.set.insert(word.to_string())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// Mapping from encoding to the word that claimed it
#[derive(Debug, Default)]
pub struct EncodingClaims {
    map: HashMap<String, String, RandomState>,
}

impl EncodingClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Word that holds `encoding`, if any
    pub fn claimant(&self, encoding: &str) -> Option<&str> {
        self.map.get(encoding).map(String::as_str)
    }

    /// Bind `encoding` to `word`.
    ///
    /// Returns false and keeps the existing binding if the encoding is
    /// already claimed.
    pub fn claim(&mut self, encoding: &str, word: &str) -> bool {
        if self.map.contains_key(encoding) {
            return false;
        }
        self.map.insert(encoding.to_string(), word.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seen_words() {
        let mut seen = SeenWords::new();

        assert!(seen.insert("你"));
        assert!(seen.insert("好"));
        assert!(!seen.insert("你")); // Duplicate

        assert_eq!(seen.len(), 2);
        assert!(!seen.is_empty());
    }

    #[test]
    fn test_encoding_claims() {
        let mut claims = EncodingClaims::new();
        assert!(claims.is_empty());

        assert!(claims.claim("a", "啊"));
        assert!(!claims.claim("a", "阿"));

        assert_eq!(claims.claimant("a"), Some("啊"));
        assert_eq!(claims.claimant("b"), None);
        assert_eq!(claims.len(), 1);
    }
}
