//! Per-position feedback states
//!
//! The numeric values match the digits used on the board: 0 = absent,
//! 1 = present, 2 = correct.

use std::fmt;

/// Feedback for a single board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeedbackState {
    /// Letter does not occur (beyond the occurrences already matched)
    Absent = 0,
    /// Letter occurs elsewhere in the answer
    Present = 1,
    /// Letter is in the right position
    Correct = 2,
}

/// Error type for malformed feedback input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// A numeric state outside 0..=2
    InvalidState(u8),
    /// A character that does not name a feedback state
    InvalidSymbol(char),
    /// Feedback did not contain exactly five states
    InvalidLength(usize),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(value) => {
                write!(f, "Feedback state must be 0, 1 or 2, got {value}")
            }
            Self::InvalidSymbol(ch) => write!(
                f,
                "Unknown feedback symbol '{ch}' (use G/Y/-, 2/1/0 or 🟩🟨⬜)"
            ),
            Self::InvalidLength(len) => {
                write!(f, "Feedback must have exactly 5 states, got {len}")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl FeedbackState {
    /// All states in ascending numeric order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Present, Self::Correct];

    /// Numeric value (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/'C'/'c'/🟩 for correct
    /// - 'Y'/'y'/'P'/'p'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    /// - a board digit 0, 1 or 2
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidState` for digits above 2 and
    /// `FeedbackError::InvalidSymbol` for anything else.
    pub fn from_symbol(symbol: char) -> Result<Self, FeedbackError> {
        match symbol {
            'G' | 'g' | 'C' | 'c' | '🟩' => Ok(Self::Correct),
            'Y' | 'y' | 'P' | 'p' | '🟨' => Ok(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Ok(Self::Absent),
            digit if digit.is_ascii_digit() => Self::try_from(digit as u8 - b'0'),
            other => Err(FeedbackError::InvalidSymbol(other)),
        }
    }

    /// Emoji tile for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl TryFrom<u8> for FeedbackState {
    type Error = FeedbackError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Absent),
            1 => Ok(Self::Present),
            2 => Ok(Self::Correct),
            other => Err(FeedbackError::InvalidState(other)),
        }
    }
}

impl fmt::Display for FeedbackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
