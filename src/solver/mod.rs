//! Solving algorithms
//!
//! Candidate pruning (`engine`), the positional frequency table
//! (`frequency`), and guess selection (`strategy`).

pub mod engine;
pub mod frequency;
pub mod strategy;

pub use engine::{EmptyCandidatePool, Session, SessionOutcome, filter_candidates};
pub use frequency::PositionFrequency;
pub use strategy::{RandomStrategy, Strategy, StrategyType, VowelFirstStrategy};
