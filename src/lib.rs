//! Wordle Hint
//!
//! Given the rows of a Wordle board, work out which answers are still possible
//! and which next guess leaves the fewest candidates on average.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hint::core::{Row, Word};
//! use wordle_hint::solver::{best_information_guess, filter_candidates};
//!
//! let words: Vec<Word> = ["piano", "phony", "phone", "ports", "spore"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let rows = [Row::parse("ports:21000").unwrap()];
//!
//! let candidates = filter_candidates(&rows, &words);
//! assert_eq!(candidates.len(), 3);
//!
//! let best = best_information_guess(&candidates, &rows, false, &words);
//! assert_eq!(best.word.unwrap().text(), "phone");
//! ```

// Core domain types
pub mod core;

// Filtering and guess search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
