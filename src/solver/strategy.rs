//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::frequency::PositionFrequency;
use crate::core::Word;

/// A strategy for selecting the next guess from the candidate pool
pub trait Strategy {
    /// Select the next guess from the pool
    ///
    /// Returns `None` only when the pool is empty, which is a caller error:
    /// the session surfaces pool exhaustion before selection runs.
    fn select<'a>(&self, pool: &'a [Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Vowel-first heuristic (default)
    VowelFirst(VowelFirstStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select<'a>(&self, pool: &'a [Word]) -> Option<&'a Word> {
        match self {
            Self::VowelFirst(s) => s.select(pool),
            Self::Random(s) => s.select(pool),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "vowel-first", "random". Defaults to vowel-first if
    /// the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::VowelFirst(VowelFirstStrategy),
        }
    }
}

/// Two-tier vowel-first heuristic
///
/// Tier one keeps the words with the maximum vowel-occurrence count; tier
/// two breaks ties by a positional letter-frequency score computed over the
/// whole pool. Vowel-rich words tend to split the pool informatively, and
/// the frequency score favors guesses whose letter-position pattern is
/// representative of the remaining candidates — a cheap stand-in for full
/// entropy computation.
pub struct VowelFirstStrategy;

impl Strategy for VowelFirstStrategy {
    fn select<'a>(&self, pool: &'a [Word]) -> Option<&'a Word> {
        let max_vowels = pool.iter().map(Word::vowel_count).max()?;

        let vowel_heavy: Vec<&Word> = pool
            .iter()
            .filter(|w| w.vowel_count() == max_vowels)
            .collect();

        if let [only] = *vowel_heavy.as_slice() {
            return Some(only);
        }

        // Tie-break over the entire pool, not just the vowel-heavy subset
        let table = PositionFrequency::build(pool);

        let mut best: Option<(&Word, u32)> = None;
        for word in vowel_heavy {
            let score = table.score(word);
            // Strict comparison keeps the first-seen word on ties
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }

        best.map(|(word, _)| word)
    }
}

/// Random strategy
///
/// Randomly selects from the remaining candidates. Mostly useful for
/// comparing the heuristic against a baseline.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select<'a>(&self, pool: &'a [Word]) -> Option<&'a Word> {
        use rand::prelude::IndexedRandom;

        pool.choose(&mut rand::rng())
    }
}
