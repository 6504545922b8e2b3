//! Word list loading utilities
//!
//! Turns files or in-memory text into validated, de-duplicated word lists.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// A parsed word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedWords {
    /// Valid words in first-seen order
    pub words: Vec<Word>,
    /// Lines that were not valid 5-letter words
    pub skipped: Vec<String>,
    /// Valid entries dropped because they had already been seen
    pub duplicates: usize,
}

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are ignored;
/// invalid entries are skipped and reported in [`LoadedWords::skipped`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_hint::wordlists::loader::load_from_file;
///
/// let loaded = load_from_file("answers.txt").unwrap();
/// println!("Loaded {} words", loaded.words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<LoadedWords> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse a word list from text
///
/// # Examples
/// ```
/// use wordle_hint::wordlists::loader::parse_words;
///
/// let loaded = parse_words("piano\n# comment\nPHONY\n\nph0ne\npiano\n");
/// let texts: Vec<&str> = loaded.words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["piano", "phony"]);
/// assert_eq!(loaded.skipped, ["ph0ne"]);
/// assert_eq!(loaded.duplicates, 1);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> LoadedWords {
    let mut loaded = LoadedWords::default();
    let mut seen: FxHashSet<Word> = FxHashSet::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => {
                if seen.insert(word.clone()) {
                    loaded.words.push(word);
                } else {
                    loaded.duplicates += 1;
                }
            }
            Err(_) => loaded.skipped.push(trimmed.to_string()),
        }
    }

    loaded
}

/// Convert a string slice to a Word vector
///
/// Invalid entries are skipped.
///
/// # Examples
/// ```
/// use wordle_hint::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["piano", "toolong", "phony"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["piano", "phony", "phone"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "piano");
        assert_eq!(words[1].text(), "phony");
        assert_eq!(words[2].text(), "phone");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["piano", "toolong", "abc", "phone"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "piano");
        assert_eq!(words[1].text(), "phone");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_words_handles_whitespace_and_case() {
        let loaded = parse_words("  Piano  \r\nPHONE\n");
        let texts: Vec<&str> = loaded.words.iter().map(Word::text).collect();
        assert_eq!(texts, ["piano", "phone"]);
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn parse_words_deduplicates_case_insensitively() {
        let loaded = parse_words("piano\nPIANO\nphony\npiano\n");
        assert_eq!(loaded.words.len(), 2);
        assert_eq!(loaded.duplicates, 2);
    }

    #[test]
    fn parse_words_reports_skipped_lines() {
        let loaded = parse_words("piano\nfoo\nports!\n");
        assert_eq!(loaded.words.len(), 1);
        assert_eq!(loaded.skipped, ["foo", "ports!"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/a/real/path/words.txt");
        assert!(result.is_err());
    }
}
