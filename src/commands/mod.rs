//! Command implementations

pub mod assist;
pub mod solve;

pub use assist::run_assist;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
