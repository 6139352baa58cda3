//! Solving session: candidate pool ownership and pruning
//!
//! A `Session` owns the candidate pool for one solving session. The pool is
//! seeded from the dictionary, shrinks monotonically as feedback arrives,
//! and is never shared or mutated mid-round.

use crate::core::{Feedback, Word};
use std::fmt;

/// Error surfaced when a filter step leaves zero candidates
///
/// Signals a contradiction in the entered feedback or an incomplete
/// dictionary. Non-recoverable within the session; there is no rollback of
/// prior rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCandidatePool;

impl fmt::Display for EmptyCandidatePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No candidates remain: the feedback entered is contradictory or the dictionary is incomplete"
        )
    }
}

impl std::error::Error for EmptyCandidatePool {}

/// How a solving session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// All 5 positions came back Exact after this many rounds
    Solved { rounds: usize },
    /// The filter step left zero candidates
    Exhausted,
    /// The user requested an early exit
    Aborted,
}

/// Keep only the pool words that would produce `observed` against `guess`
///
/// The true secret necessarily satisfies this equality for the real
/// feedback, so filtering never discards it. Relative order of retained
/// words is preserved.
#[must_use]
pub fn filter_candidates(pool: &[Word], guess: &Word, observed: Feedback) -> Vec<Word> {
    pool.iter()
        .filter(|candidate| Feedback::evaluate(guess, candidate) == observed)
        .cloned()
        .collect()
}

/// One solving session over a candidate pool
pub struct Session {
    candidates: Vec<Word>,
}

impl Session {
    /// Start a session seeded with the full dictionary
    #[must_use]
    pub const fn new(candidates: Vec<Word>) -> Self {
        Self { candidates }
    }

    /// The words still consistent with all feedback so far
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Prune the pool with one round of (guess, feedback)
    ///
    /// Returns the number of candidates remaining after the prune.
    ///
    /// # Errors
    /// Returns `EmptyCandidatePool` when no candidate survives; the session
    /// must then terminate.
    pub fn apply(&mut self, guess: &Word, observed: Feedback) -> Result<usize, EmptyCandidatePool> {
        self.candidates = filter_candidates(&self.candidates, guess, observed);

        if self.candidates.is_empty() {
            return Err(EmptyCandidatePool);
        }

        Ok(self.candidates.len())
    }
}
