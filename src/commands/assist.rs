//! Interactive assist mode
//!
//! The read-eval loop around the solver core: suggest a guess, read the
//! feedback the game produced, prune the pool, repeat.

use crate::core::{Feedback, Word};
use crate::output::round_line;
use crate::solver::{Session, SessionOutcome, Strategy};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive assist loop until solved, exhausted, or aborted
///
/// Each round suggests the strategy's pick from the remaining candidates and
/// reads a feedback code from stdin. Malformed feedback is reported and
/// re-prompted without touching the candidate pool.
///
/// # Errors
///
/// Returns an error if the dictionary is empty or stdin/stdout fail.
pub fn run_assist<S: Strategy>(
    strategy: &S,
    dictionary: Vec<Word>,
) -> Result<SessionOutcome, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Wordle Assist - Vowel-First Heuristic             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Each round I suggest the candidate with the most vowels,");
    println!("tie-broken by positional letter frequency.");
    println!("Enter the feedback your game showed for that guess:\n");
    println!("  - 'g' for green (correct position)");
    println!("  - 'y' for yellow (wrong position)");
    println!("  - 'b' for gray (not in word)\n");
    println!("Type 'quit' to exit.\n");

    let mut session = Session::new(dictionary);
    if session.remaining() == 0 {
        return Err("Dictionary is empty".to_string());
    }

    let mut round = 1;

    loop {
        let guess = strategy
            .select(session.candidates())
            .cloned()
            .ok_or("No candidates to choose from")?;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {round}: {} candidates remaining",
            session.remaining()
        );
        println!(
            "Suggested guess: {}",
            guess.text().to_uppercase().bright_yellow().bold()
        );

        // Show the remainder once the pool is small
        if session.remaining() <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates() {
                println!("  • {}", candidate.text().to_uppercase());
            }
        }
        println!();

        // Re-prompt until the feedback parses or the user quits
        let feedback = loop {
            let input = get_user_input("Feedback (5 chars, g/y/b)")?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Exiting solver.\n");
                    return Ok(SessionOutcome::Aborted);
                }
                raw => match raw.parse::<Feedback>() {
                    Ok(feedback) => break feedback,
                    Err(e) => {
                        println!("{} {e}", "❗".red());
                        println!("Please re-enter exactly 5 letters from 'g', 'y', 'b'.\n");
                    }
                },
            }
        };

        println!("\n   You entered: {}\n", round_line(guess.text(), feedback));

        if feedback.is_solved() {
            println!(
                "{}",
                format!(
                    "🎉 Solved in {round} {}! The word is '{}'.",
                    if round == 1 { "round" } else { "rounds" },
                    guess.text().to_uppercase()
                )
                .bright_green()
                .bold()
            );
            println!();
            return Ok(SessionOutcome::Solved { rounds: round });
        }

        match session.apply(&guess, feedback) {
            Ok(remaining) => {
                println!("   → {remaining} possible words remain.\n");
            }
            Err(e) => {
                println!("{}", format!("❌ {e}").red().bold());
                println!("Check the feedback you entered and the word list.\n");
                return Ok(SessionOutcome::Exhausted);
            }
        }

        round += 1;
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
