//! Score command
//!
//! Shows the feedback a guess would receive against a given answer.

use crate::core::{Pattern, Word, WordError};

/// Feedback for one (guess, answer) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub pattern: Pattern,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns `WordError` if either word is not a valid 5-letter word.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let pattern = Pattern::calculate(&guess, &answer);

    Ok(ScoreResult {
        guess,
        answer,
        pattern,
    })
}
