//! Self-play command
//!
//! Plays the solving loop against a known target word, generating feedback
//! internally with the evaluator, and records the solution path.

use crate::core::{Feedback, Word};
use crate::solver::{Session, Strategy};

/// Configuration for solving a target word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a target word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single round in the solution path
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word using the given strategy over the dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 lowercase letters)
/// - The dictionary is empty
/// - Pruning eliminates every candidate (target not in the dictionary)
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    strategy: &S,
    dictionary: &[Word],
) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut session = Session::new(dictionary.to_vec());
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.remaining();

        let guess = strategy
            .select(session.candidates())
            .cloned()
            .ok_or_else(|| "No candidates remaining".to_string())?;

        let feedback = Feedback::evaluate(&guess, &target);

        if feedback.is_solved() {
            guesses.push(GuessStep {
                word: guess.text().to_string(),
                feedback,
                candidates_before,
                candidates_after: 1,
            });
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }

        let candidates_after = session
            .apply(&guess, feedback)
            .map_err(|e| format!("{e} (is '{}' in the dictionary?)", config.target))?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
        });
    }

    // Ran out of guesses
    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::VowelFirstStrategy;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_word_succeeds_on_dictionary_word() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("crane".to_string());

        let result = solve_word(config, &VowelFirstStrategy, &dictionary).unwrap();

        assert!(result.success || result.guesses.len() == 6);
        assert!(!result.guesses.is_empty());
        if result.success {
            assert_eq!(result.guesses.last().unwrap().word, "crane");
        }
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("slate".to_string());

        let result = solve_word(config, &VowelFirstStrategy, &dictionary).unwrap();

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = words_from_slice(WORDS);
        let config = SolveConfig::new("toolong".to_string());

        assert!(solve_word(config, &VowelFirstStrategy, &dictionary).is_err());
    }

    #[test]
    fn solve_target_missing_from_dictionary_returns_error() {
        let dictionary = words_from_slice(&["crane", "slate"]);
        let config = SolveConfig::new("zzzzz".to_string());

        // Valid word shape, but pruning empties the two-word pool
        assert!(solve_word(config, &VowelFirstStrategy, &dictionary).is_err());
    }

    #[test]
    fn solve_respects_max_guesses_limit() {
        let dictionary = words_from_slice(WORDS);
        let mut config = SolveConfig::new("crane".to_string());
        config.max_guesses = 3;

        let result = solve_word(config, &VowelFirstStrategy, &dictionary).unwrap();

        assert!(result.guesses.len() <= 3);
    }

    #[test]
    fn solve_single_word_dictionary_is_immediate() {
        let dictionary = words_from_slice(&["crane"]);
        let config = SolveConfig::new("crane".to_string());

        let result = solve_word(config, &VowelFirstStrategy, &dictionary).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert!(result.guesses[0].feedback.is_solved());
    }
}
