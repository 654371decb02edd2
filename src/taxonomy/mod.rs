//! Lexical taxonomy interface: senses, grammatical categories, and the
//! hierarchy operations the similarity metrics are built on.
//!
//! The `Taxonomy` trait deliberately keeps the underlying library's two
//! failure conventions apart: plain "no value" lookups are `Option`-shaped,
//! while cross-category comparisons are errors. The similarity engine is the
//! one place those errors get caught and normalized.

pub mod resolver;
pub mod store;

use thiserror::Error;

pub use resolver::{FirstSense, SenseResolver, SenseSelection};
pub use store::{TaxonomyBuilder, TaxonomyStore};

/// Grammatical category of a sense, WordNet-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// One-letter tag used in data files ("n", "v", "a", "r").
    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::Adverb => "r",
        }
    }
}

impl std::str::FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(PartOfSpeech::Noun),
            "v" => Ok(PartOfSpeech::Verb),
            "a" => Ok(PartOfSpeech::Adjective),
            "r" => Ok(PartOfSpeech::Adverb),
            other => Err(format!("unknown part of speech tag {:?}", other)),
        }
    }
}

/// Opaque handle to one sense in a taxonomy. Only meaningful to the taxonomy
/// that produced it; carries no identity of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sense(pub(crate) u32);

/// Internal taxonomy failures for hierarchy operations that require the two
/// senses to be comparable.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    /// The senses live under different grammatical categories.
    #[error("senses {0} and {1} belong to incomparable categories")]
    CrossCategory(String, String),

    /// Same category, but the hierarchy has no shared ancestor.
    #[error("senses {0} and {1} have no common subsumer")]
    NoCommonSubsumer(String, String),
}

/// Hierarchy operations over a lexical taxonomy.
pub trait Taxonomy {
    /// Candidate senses for a lemma, in the taxonomy's native ranking order
    /// (by convention, most frequent sense first), optionally filtered by
    /// grammatical category.
    fn senses(&self, lemma: &str, pos: Option<PartOfSpeech>) -> Vec<Sense>;

    /// Stable external identifier of a sense, e.g. "dog.n.01". Used for
    /// diagnostics and for keying the information-content model.
    fn key(&self, sense: Sense) -> &str;

    fn part_of_speech(&self, sense: Sense) -> PartOfSpeech;

    /// Depth of a sense counted in nodes from its category root (root = 1).
    fn depth(&self, sense: Sense) -> u32;

    /// Deepest sense depth within a category.
    fn max_depth(&self, pos: PartOfSpeech) -> u32;

    /// Length in edges of the shortest hierarchical path between two senses,
    /// going through a common ancestor. `None` when the hierarchy connects
    /// no path between them (e.g. senses under different roots).
    fn shortest_path_len(&self, a: Sense, b: Sense) -> Option<u32>;

    /// Least common subsumer of two comparable senses: the deepest node that
    /// is an ancestor of both (a sense counts as its own ancestor).
    /// Cross-category pairs and same-category pairs with no shared ancestor
    /// are errors, mirroring taxonomy APIs that raise instead of returning a
    /// sentinel.
    fn comparable_subsumer(&self, a: Sense, b: Sense) -> Result<Sense, TaxonomyError>;

    /// `Option`-shaped variant of [`Taxonomy::comparable_subsumer`] for
    /// metrics that treat a missing subsumer as plain "no value".
    fn least_common_subsumer(&self, a: Sense, b: Sense) -> Option<Sense> {
        self.comparable_subsumer(a, b).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn pos_tags_round_trip() {
        for pos in [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adjective,
            PartOfSpeech::Adverb,
        ] {
            assert_eq!(PartOfSpeech::from_str(pos.tag()).unwrap(), pos);
        }
    }

    #[test]
    fn pos_rejects_unknown_tag() {
        assert!(PartOfSpeech::from_str("x").is_err());
    }
}
