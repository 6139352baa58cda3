//! Wordle Assist
//!
//! An interactive Wordle solving aid using a vowel-first heuristic with a
//! positional letter-frequency tie-break.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Feedback, Word};
//!
//! // Create words
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("slate").unwrap();
//!
//! // Evaluate the guess against the secret
//! let feedback = Feedback::evaluate(&guess, &secret);
//! println!("Feedback code: {}", feedback.code());
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
