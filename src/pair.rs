//! Order-independent, case-insensitive word pair keys.
//!
//! Both the reference data and the results data are keyed by unordered word
//! pairs, so the same normalization must run on both sides before any join.

use std::fmt;

/// Canonical key for an unordered word pair.
///
/// Both words are put through full Unicode case folding (so e.g. German
/// "Straße" and "STRASSE" produce the same component) and then stored in
/// lexicographic order, making `new(a, b)` and `new(b, a)` equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordPairKey(String, String);

impl WordPairKey {
    /// Normalize two words into a pair key. Pure; no error conditions.
    pub fn new(a: &str, b: &str) -> Self {
        let mut a = caseless::default_case_fold_str(a);
        let mut b = caseless::default_case_fold_str(b);
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        WordPairKey(a, b)
    }

    /// First word of the key (lexicographically smaller after folding).
    pub fn first(&self) -> &str {
        &self.0
    }

    /// Second word of the key.
    pub fn second(&self) -> &str {
        &self.1
    }
}

impl fmt::Display for WordPairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
