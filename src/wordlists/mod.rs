//! Word lists for Wordle solving
//!
//! No list is compiled in; callers load answer and guess lists from files
//! or build them from slices.

pub mod loader;

pub use loader::{LoadedWords, load_from_file, parse_words, words_from_slice};
