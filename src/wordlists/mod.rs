//! Word lists for Wordle solving
//!
//! Provides an embedded dictionary compiled into the binary plus loading
//! from user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // All entries should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_contain_common_openers() {
        for opener in ["crane", "slate", "adieu", "audio"] {
            assert!(
                WORDS.contains(&opener),
                "Dictionary is missing '{opener}'"
            );
        }
    }
}
