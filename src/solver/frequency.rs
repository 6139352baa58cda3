//! Positional letter-frequency table
//!
//! Counts, for each of the 5 positions and each of the 26 letters, how many
//! pool words have that letter at that position. Rebuilt from the current
//! pool on every selection call; never cached across rounds.

use crate::core::Word;

/// A 5x26 letter-by-position frequency table over a candidate pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionFrequency {
    counts: [[u32; 26]; 5],
}

impl PositionFrequency {
    /// Build the table from the given pool
    #[must_use]
    pub fn build(pool: &[Word]) -> Self {
        let mut counts = [[0u32; 26]; 5];

        for word in pool {
            for (position, &letter) in word.chars().iter().enumerate() {
                counts[position][usize::from(letter - b'a')] += 1;
            }
        }

        Self { counts }
    }

    /// Number of pool words with `letter` at `position`
    #[inline]
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> u32 {
        self.counts[position][usize::from(letter - b'a')]
    }

    /// Score a word by summing its positional frequencies
    ///
    /// Each distinct letter value is credited at most once per word: scanning
    /// positions left to right, a position contributes nothing if its letter
    /// was already credited earlier in the same word.
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        let mut seen = [false; 26];
        let mut score = 0;

        for (position, &letter) in word.chars().iter().enumerate() {
            let index = usize::from(letter - b'a');
            if seen[index] {
                continue;
            }
            seen[index] = true;
            score += self.counts[position][index];
        }

        score
    }
}
