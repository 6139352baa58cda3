//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore};

/// Format feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .scores()
        .iter()
        .map(|score| match score {
            LetterScore::Exact => '🟩',
            LetterScore::Present => '🟨',
            LetterScore::Absent => '⬜',
        })
        .collect()
}

/// Render one round's result: emoji feedback followed by the guess
///
/// Matches the layout used by the assist loop when echoing entered feedback.
#[must_use]
pub fn round_line(guess: &str, feedback: Feedback) -> String {
    format!("{}   ({})", feedback_to_emoji(feedback), guess)
}
