//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, InvalidFeedbackFormat, LetterScore};
pub use word::{VOWELS, Word, WordError};
