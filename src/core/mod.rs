//! Core domain types for Wordle
//!
//! Words, feedback states, patterns and board rows. Everything here is pure
//! and validated at construction, so the solver never sees malformed input.

mod feedback;
mod pattern;
mod row;
mod word;

pub use feedback::{FeedbackError, FeedbackState};
pub use pattern::Pattern;
pub use row::{Row, RowError};
pub use word::{WORD_LENGTH, Word, WordError};
