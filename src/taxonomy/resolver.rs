//! Mapping a bare word to exactly one taxonomy sense.
//!
//! Which of several candidate senses to pick is a policy decision, so the
//! tie-break lives behind [`SenseSelection`] and can be swapped without
//! touching callers. The only policy shipped is [`FirstSense`].

use crate::error::{Result, WordsimError};
use crate::taxonomy::{PartOfSpeech, Sense, Taxonomy};

/// Tie-break policy over a ranked candidate list.
pub trait SenseSelection {
    /// Picks one sense out of the candidates, or `None` if there are none.
    /// Candidates arrive in the taxonomy's native ranking order.
    fn select(&self, candidates: &[Sense]) -> Option<Sense>;
}

/// Selects the first candidate, i.e. trusts the taxonomy's own ranking
/// (by convention, most frequent sense first). No re-ranking.
pub struct FirstSense;

impl SenseSelection for FirstSense {
    fn select(&self, candidates: &[Sense]) -> Option<Sense> {
        candidates.first().copied()
    }
}

/// Resolves words to single senses against a taxonomy. Stateless: nothing is
/// cached across calls, so callers that need a stable handle for a whole
/// similarity battery must resolve once and reuse the result.
pub struct SenseResolver<'a, T: Taxonomy, P: SenseSelection = FirstSense> {
    taxonomy: &'a T,
    policy: P,
}

impl<'a, T: Taxonomy> SenseResolver<'a, T, FirstSense> {
    pub fn new(taxonomy: &'a T) -> Self {
        SenseResolver {
            taxonomy,
            policy: FirstSense,
        }
    }
}

impl<'a, T: Taxonomy, P: SenseSelection> SenseResolver<'a, T, P> {
    pub fn with_policy(taxonomy: &'a T, policy: P) -> Self {
        SenseResolver { taxonomy, policy }
    }

    /// Maps a word (optionally restricted to a grammatical category) to one
    /// sense. `NoSenseFound` when the taxonomy has no entry for the word.
    pub fn resolve(&self, word: &str, pos: Option<PartOfSpeech>) -> Result<Sense> {
        let candidates = self.taxonomy.senses(word, pos);
        self.policy
            .select(&candidates)
            .ok_or_else(|| WordsimError::NoSenseFound(word.to_string()))
    }
}
