//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::feedback::{FeedbackError, FeedbackState};
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Build a pattern from five feedback states
    #[must_use]
    pub fn from_states(states: [FeedbackState; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for state in states {
            pattern += state.value() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Decode into the five per-position states
    #[must_use]
    pub fn states(self) -> [FeedbackState; WORD_LENGTH] {
        let mut states = [FeedbackState::Absent; WORD_LENGTH];
        let mut val = self.0;
        for state in &mut states {
            *state = match val % 3 {
                2 => FeedbackState::Correct,
                1 => FeedbackState::Present,
                _ => FeedbackState::Absent,
            };
            val /= 3;
        }
        states
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those answer positions
    /// 2. Second pass: for each remaining guess position, the leftmost unconsumed
    ///    answer position holding the same letter makes it present and is consumed
    /// 3. Everything else stays absent
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::{FeedbackState::*, Pattern, Word};
    ///
    /// let guess = Word::new("sissy").unwrap();
    /// let answer = Word::new("piano").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(pattern.states(), [Absent, Correct, Absent, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.chars();
        let answer = answer.chars();
        let mut result = [FeedbackState::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // Allow: index needed to access guess[i], answer[i] and consumed[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                result[i] = FeedbackState::Correct;
                consumed[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] != FeedbackState::Absent {
                continue;
            }
            if let Some(j) = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == guess[i]) {
                result[i] = FeedbackState::Present;
                consumed[j] = true;
            }
        }

        Self::from_states(result)
    }

    /// Parse a pattern from a string like "GY---", "21000" or "🟩🟨⬜⬜⬜"
    ///
    /// Whitespace and commas between symbols are ignored, so "2,1,0,0,0"
    /// and "2 1 0 0 0" are accepted too. So is the U+FE0F variation selector
    /// that share grids attach to the white and black squares.
    ///
    /// # Errors
    /// Returns `FeedbackError` for unknown symbols, digits above 2 or a state
    /// count other than 5.
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY---").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜⬜⬜").unwrap();
    /// let p3 = Pattern::parse("2,1,0,0,0").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let states = s
            .chars()
            .filter(|&ch| !ch.is_whitespace() && ch != ',' && ch != '\u{fe0f}')
            .map(FeedbackState::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;

        let states: [FeedbackState; WORD_LENGTH] = states
            .as_slice()
            .try_into()
            .map_err(|_| FeedbackError::InvalidLength(states.len()))?;

        Ok(Self::from_states(states))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.states().iter().map(|s| s.emoji()).collect()
    }

    /// Convert pattern to board digits, e.g. "21000"
    #[must_use]
    pub fn to_digits(self) -> String {
        self.states().iter().map(ToString::to_string).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_digits())
    }
}
