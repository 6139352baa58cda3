//! Wordle Assist - CLI
//!
//! Interactive Wordle solving aid. Suggests guesses with a vowel-first
//! heuristic and prunes the candidate pool from the feedback you enter.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_assist::{
    commands::{SolveConfig, run_assist, solve_word},
    core::Word,
    output::print_solve_result,
    solver::StrategyType,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Interactive Wordle solving aid (vowel-first heuristic)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: vowel-first (default) or random
    #[arg(short, long, global = true, default_value = "vowel-first")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assist mode (default)
    Assist,

    /// Self-play against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_assist::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            let words = load_from_file(path)?;
            anyhow::ensure!(!words.is_empty(), "No valid 5-letter words in {path}");
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to assist mode if no command given
    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => {
            run_assist(&strategy, dictionary).map_err(|e| anyhow::anyhow!(e))?;
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word);
            let result =
                solve_word(config, &strategy, &dictionary).map_err(|e| anyhow::anyhow!(e))?;

            print_solve_result(&result, verbose);
            Ok(())
        }
    }
}
