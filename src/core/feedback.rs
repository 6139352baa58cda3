//! Wordle feedback evaluation and its compact text encoding
//!
//! Feedback classifies each of a guess's 5 positions as:
//! - `Exact` (green): correct letter, correct position
//! - `Present` (yellow): letter occurs elsewhere in the secret
//! - `Absent` (gray): letter not available in the secret
//!
//! The text encoding uses one character per position: 'g' for Exact,
//! 'y' for Present, 'b' for Absent.

use super::Word;
use std::fmt;
use std::str::FromStr;

/// Per-position feedback class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Letter not in the secret (or all its occurrences already credited)
    Absent,
    /// Letter in the secret, wrong position
    Present,
    /// Letter in the correct position
    Exact,
}

impl LetterScore {
    /// The encoding symbol for this class
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }
}

/// Feedback for a full 5-letter guess
///
/// A fixed-size value type, so the length-5 invariant is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterScore; 5]);

/// Error returned when a raw feedback string cannot be decoded
///
/// Raised when the normalized input is not exactly 5 characters from the
/// alphabet {'g', 'y', 'b'}. The whole parse fails; there are no partial
/// results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidFeedbackFormat {
    BadLength(usize),
    BadSymbol(char),
}

impl fmt::Display for InvalidFeedbackFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(len) => {
                write!(f, "Feedback must be exactly 5 characters, got {len}")
            }
            Self::BadSymbol(ch) => {
                write!(f, "Feedback may only use 'g', 'y', 'b'; found {ch:?}")
            }
        }
    }
}

impl std::error::Error for InvalidFeedbackFormat {}

impl Feedback {
    /// All greens (solved)
    pub const SOLVED: Self = Self([LetterScore::Exact; 5]);

    /// Create feedback directly from per-position scores
    #[must_use]
    pub const fn new(scores: [LetterScore; 5]) -> Self {
        Self(scores)
    }

    /// Get the per-position scores
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; 5] {
        &self.0
    }

    /// Check whether every position is Exact
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Evaluate a guess against a secret word
    ///
    /// Implements Wordle's exact feedback rules with consume-once matching,
    /// so each secret letter occurrence is credited to at most one guess
    /// position.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and consume those secret
    ///    slots.
    /// 2. Second pass: for each still-Absent position, look for the guess
    ///    letter among the unconsumed secret slots in position order; on a
    ///    hit mark Present and consume that slot.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, LetterScore, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// assert_eq!(feedback.scores()[2], LetterScore::Exact);
    /// assert_eq!(feedback.scores()[4], LetterScore::Exact);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut scores = [LetterScore::Absent; 5];
        // One consumed flag per secret position, rather than a mutable copy
        // of the secret itself
        let mut consumed = [false; 5];

        // First pass: exact matches
        for i in 0..5 {
            if guess.char_at(i) == secret.char_at(i) {
                scores[i] = LetterScore::Exact;
                consumed[i] = true;
            }
        }

        // Second pass: present-elsewhere matches against unconsumed slots
        for i in 0..5 {
            if scores[i] != LetterScore::Absent {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(slot) = (0..5).find(|&j| !consumed[j] && secret.char_at(j) == letter) {
                scores[i] = LetterScore::Present;
                consumed[slot] = true;
            }
        }

        Self(scores)
    }

    /// Encode the feedback as its 5-character 'g'/'y'/'b' code
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Feedback;
    ///
    /// let feedback: Feedback = "gybbg".parse().unwrap();
    /// assert_eq!(feedback.code(), "gybbg");
    /// ```
    #[must_use]
    pub fn code(&self) -> String {
        self.0.iter().map(|score| score.symbol()).collect()
    }

    /// Count the number of Exact positions
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Exact)
            .count()
    }

    /// Count the number of Present positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Present)
            .count()
    }
}

impl FromStr for Feedback {
    type Err = InvalidFeedbackFormat;

    /// Decode a raw feedback string
    ///
    /// The input is trimmed and lowercased before validation, then must be
    /// exactly 5 characters from {'g', 'y', 'b'}.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_lowercase();
        let chars: Vec<char> = normalized.chars().collect();

        if chars.len() != 5 {
            return Err(InvalidFeedbackFormat::BadLength(chars.len()));
        }

        let mut scores = [LetterScore::Absent; 5];
        for (i, &ch) in chars.iter().enumerate() {
            scores[i] = match ch {
                'g' => LetterScore::Exact,
                'y' => LetterScore::Present,
                'b' => LetterScore::Absent,
                _ => return Err(InvalidFeedbackFormat::BadSymbol(ch)),
            };
        }

        Ok(Self(scores))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Exact, Present};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn evaluate_self_is_solved() {
        for text in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = word(text);
            let feedback = Feedback::evaluate(&w, &w);
            assert_eq!(feedback, Feedback::SOLVED);
            assert!(feedback.is_solved());
        }
    }

    #[test]
    fn evaluate_all_absent() {
        let feedback = Feedback::evaluate(&word("abcde"), &word("fghij"));
        assert_eq!(feedback, Feedback::new([Absent; 5]));
        assert_eq!(feedback.count_exact(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn evaluate_classic_example() {
        // CRANE vs SLATE: A and E are exact, R is absent (SLATE has no R)
        let feedback = Feedback::evaluate(&word("crane"), &word("slate"));
        assert_eq!(
            feedback,
            Feedback::new([Absent, Absent, Exact, Absent, Exact])
        );
    }

    #[test]
    fn evaluate_speed_vs_erase_fixture() {
        // Hand-derived with the consume-once passes:
        // S credits the S at secret slot 3 -> Present
        // P absent
        // first E consumes secret slot 0 -> Present
        // second E consumes secret slot 4 -> Present
        // D absent
        let feedback = Feedback::evaluate(&word("speed"), &word("erase"));
        assert_eq!(
            feedback,
            Feedback::new([Present, Absent, Present, Present, Absent])
        );
    }

    #[test]
    fn evaluate_allee_vs_eagle_fixture() {
        // A Present, first L Present, second L Absent (only one L in EAGLE),
        // first E Present, final E Exact
        let feedback = Feedback::evaluate(&word("allee"), &word("eagle"));
        assert_eq!(
            feedback,
            Feedback::new([Present, Present, Absent, Present, Exact])
        );
    }

    #[test]
    fn evaluate_duplicate_guess_letters_not_double_credited() {
        // GEESE vs CREEP: only two E's in the secret may be credited
        let feedback = Feedback::evaluate(&word("geese"), &word("creep"));
        let credited = feedback
            .scores()
            .iter()
            .zip(word("geese").chars())
            .filter(|&(&s, &ch)| ch == b'e' && s != Absent)
            .count();
        assert_eq!(credited, 2);
    }

    #[test]
    fn evaluate_exact_consumes_before_present() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining O
        let feedback = Feedback::evaluate(&word("robot"), &word("floor"));
        assert_eq!(
            feedback,
            Feedback::new([Present, Present, Absent, Exact, Absent])
        );
    }

    #[test]
    fn evaluate_credit_never_exceeds_secret_count() {
        let pairs = [
            ("eeeee", "eagle"),
            ("speed", "erase"),
            ("llama", "adieu"),
            ("geese", "creep"),
        ];
        for (guess_text, secret_text) in pairs {
            let guess = word(guess_text);
            let secret = word(secret_text);
            let feedback = Feedback::evaluate(&guess, &secret);
            for letter in b'a'..=b'z' {
                let credited = feedback
                    .scores()
                    .iter()
                    .zip(guess.chars())
                    .filter(|&(&s, &ch)| ch == letter && s != Absent)
                    .count();
                let in_secret = secret.chars().iter().filter(|&&ch| ch == letter).count();
                let in_guess = guess.chars().iter().filter(|&&ch| ch == letter).count();
                assert!(credited <= in_secret, "{guess_text} vs {secret_text}: {letter}");
                assert!(credited <= in_guess, "{guess_text} vs {secret_text}: {letter}");
            }
        }
    }

    #[test]
    fn decode_valid_codes() {
        let feedback: Feedback = "gybbg".parse().unwrap();
        assert_eq!(
            feedback,
            Feedback::new([Exact, Present, Absent, Absent, Exact])
        );

        // Normalization: surrounding whitespace and case are forgiven
        let feedback2: Feedback = "  GyBbG \n".parse().unwrap();
        assert_eq!(feedback, feedback2);
    }

    #[test]
    fn decode_solved_code() {
        let feedback: Feedback = "ggggg".parse().unwrap();
        assert!(feedback.is_solved());
        assert_eq!(feedback, Feedback::SOLVED);
    }

    #[test]
    fn decode_rejects_bad_length() {
        assert_eq!(
            "ggyb".parse::<Feedback>(),
            Err(InvalidFeedbackFormat::BadLength(4))
        );
        assert_eq!(
            "".parse::<Feedback>(),
            Err(InvalidFeedbackFormat::BadLength(0))
        );
        assert!("ggybbg".parse::<Feedback>().is_err());
    }

    #[test]
    fn decode_rejects_bad_symbols() {
        assert_eq!(
            "ggybx".parse::<Feedback>(),
            Err(InvalidFeedbackFormat::BadSymbol('x'))
        );
        assert!("12345".parse::<Feedback>().is_err());
    }

    #[test]
    fn code_round_trip() {
        for code in ["ggggg", "bbbbb", "yyyyy", "gybbg", "bygyb"] {
            let feedback: Feedback = code.parse().unwrap();
            assert_eq!(feedback.code(), code);
            assert_eq!(feedback.code().parse::<Feedback>().unwrap(), feedback);
        }
    }

    #[test]
    fn count_exact_and_present() {
        let feedback: Feedback = "gybyg".parse().unwrap();
        assert_eq!(feedback.count_exact(), 2);
        assert_eq!(feedback.count_present(), 2);
    }
}
