//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing. The solver core
//! never depends on anything in this module.

pub mod display;
pub mod formatters;

pub use display::print_solve_result;
pub use formatters::{feedback_to_emoji, round_line};
