//! Board rows: a guess paired with the feedback the game showed for it

use super::feedback::{FeedbackError, FeedbackState};
use super::pattern::Pattern;
use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// A completed board row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    guess: Word,
    pattern: Pattern,
}

/// Error type for rows that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    Word(WordError),
    Feedback(FeedbackError),
    MissingFeedback(String),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "Invalid guess: {e}"),
            Self::Feedback(e) => write!(f, "Invalid feedback: {e}"),
            Self::MissingFeedback(input) => write!(
                f,
                "Row '{input}' has no feedback (expected e.g. 'ports:21000' or 'ports GY---')"
            ),
        }
    }
}

impl std::error::Error for RowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::Feedback(e) => Some(e),
            Self::MissingFeedback(_) => None,
        }
    }
}

impl From<WordError> for RowError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<FeedbackError> for RowError {
    fn from(e: FeedbackError) -> Self {
        Self::Feedback(e)
    }
}

impl Row {
    /// Create a row from a guess and its observed pattern
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// Create a row from a guess string and five board states
    ///
    /// # Errors
    /// Returns `RowError` if the guess is not a valid word.
    pub fn from_states(
        guess: &str,
        states: [FeedbackState; WORD_LENGTH],
    ) -> Result<Self, RowError> {
        Ok(Self::new(Word::new(guess)?, Pattern::from_states(states)))
    }

    /// Parse a row written as `guess:feedback` or `guess feedback`
    ///
    /// Feedback accepts any notation understood by [`Pattern::parse`].
    ///
    /// # Errors
    /// Returns `RowError` if either half is malformed or the feedback is missing.
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::Row;
    ///
    /// let row = Row::parse("ports:21000").unwrap();
    /// assert_eq!(row.guess().text(), "ports");
    /// assert_eq!(row, Row::parse("PORTS GY---").unwrap());
    /// assert!(Row::parse("ports").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, RowError> {
        let input = input.trim();
        let (guess, feedback) = input
            .split_once(|c: char| c == ':' || c == '=' || c.is_whitespace())
            .ok_or_else(|| RowError::MissingFeedback(input.to_string()))?;

        let feedback = feedback.trim();
        if feedback.is_empty() {
            return Err(RowError::MissingFeedback(input.to_string()));
        }

        Ok(Self::new(Word::new(guess)?, Pattern::parse(feedback)?))
    }

    /// The word that was entered
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// The feedback the game returned
    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Check whether `candidate` would have produced exactly this row's feedback
    #[inline]
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        Pattern::calculate(&self.guess, candidate) == self.pattern
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.pattern)
    }
}

impl std::str::FromStr for Row {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
