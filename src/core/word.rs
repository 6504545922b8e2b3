//! Wordle word representation
//!
//! A Word is exactly five lowercase ASCII letters, validated once at construction.

use std::fmt;

/// Number of letters in every Wordle word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
///
/// Ordering is lexicographic on the lowercase text, which the guess search
/// relies on for its final tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_hint::core::Word;
    ///
    /// let word = Word::new("Ports").unwrap();
    /// assert_eq!(word.text(), "ports");
    ///
    /// assert!(Word::new("port").is_err());
    /// assert!(Word::new("p0rts").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&ch| ch == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("piano").unwrap();
        assert_eq!(word.text(), "piano");
        assert_eq!(word.chars(), b"piano");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("PHONE").unwrap();
        assert_eq!(word.text(), "phone");

        let word2 = Word::new("PhOnY").unwrap();
        assert_eq!(word2.text(), "phony");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("port"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("port5"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("por s").is_err());
        assert!(Word::new("port!").is_err());
        assert!(matches!(Word::new("pörts"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_count_of() {
        let word = Word::new("sissy").unwrap();
        assert_eq!(word.count_of(b's'), 3);
        assert_eq!(word.count_of(b'i'), 1);
        assert_eq!(word.count_of(b'z'), 0);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let phone = Word::new("phone").unwrap();
        let phony = Word::new("phony").unwrap();
        let piano = Word::new("piano").unwrap();
        assert!(phone < phony);
        assert!(phony < piano);
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "SPORE".parse().unwrap();
        assert_eq!(format!("{word}"), "spore");
    }
}
