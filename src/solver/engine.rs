//! Main Wordle solver interface

use super::filter::filter_candidates;
use super::search::{GuessResult, best_information_guess_with_progress};
use crate::core::{Row, Word};
use indicatif::ProgressBar;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Board assistant over a fixed pair of word lists
///
/// Holds no game state: every query takes the full row history and
/// recomputes from scratch.
pub struct Solver<'a> {
    answer_words: &'a [Word],
    guess_words: &'a [Word],
}

impl<'a> Solver<'a> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `answer_words`: Words that can be the hidden answer
    /// - `guess_words`: Words the player may type (the normal-mode guess pool)
    #[must_use]
    pub const fn new(answer_words: &'a [Word], guess_words: &'a [Word]) -> Self {
        Self {
            answer_words,
            guess_words,
        }
    }

    /// Answer corpus
    #[must_use]
    pub const fn answer_words(&self) -> &'a [Word] {
        self.answer_words
    }

    /// Guess pool
    #[must_use]
    pub const fn guess_words(&self) -> &'a [Word] {
        self.guess_words
    }

    /// Answers consistent with every row
    #[must_use]
    pub fn candidates(&self, rows: &[Row]) -> Vec<&'a Word> {
        filter_candidates(rows, self.answer_words)
    }

    /// Count how many candidates remain given the rows
    #[must_use]
    pub fn count_candidates(&self, rows: &[Row]) -> usize {
        self.candidates(rows).len()
    }

    /// Pick one remaining candidate uniformly at random
    ///
    /// Returns `None` when no candidate remains.
    pub fn random_candidate<R: Rng + ?Sized>(&self, rows: &[Row], rng: &mut R) -> Option<&'a Word> {
        self.candidates(rows).choose(rng).copied()
    }

    /// Recommend the next guess
    ///
    /// Filters the answer corpus, then searches the guess pool (or, in hard
    /// mode, the candidates that respect the board) for the guess with the
    /// lowest expected remaining count.
    #[must_use]
    pub fn best_guess(&self, rows: &[Row], hard_mode: bool) -> GuessResult {
        self.best_guess_with_progress(rows, hard_mode, &ProgressBar::hidden())
    }

    /// [`Solver::best_guess`] reporting search progress
    #[must_use]
    pub fn best_guess_with_progress(
        &self,
        rows: &[Row],
        hard_mode: bool,
        progress: &ProgressBar,
    ) -> GuessResult {
        let candidates = self.candidates(rows);
        best_information_guess_with_progress(
            &candidates,
            rows,
            hard_mode,
            self.guess_words,
            progress,
        )
    }
}
