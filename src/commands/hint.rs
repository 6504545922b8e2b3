//! Best-guess hint command

use crate::core::Row;
use crate::solver::{GuessMetrics, GuessResult, Solver, evaluate_guess, guess_pool};
use indicatif::ProgressBar;
use std::time::{Duration, Instant};

/// Result of a best-guess search over the current board
#[derive(Debug, Clone)]
pub struct HintResult {
    /// Candidates remaining before the hinted guess
    pub remaining: usize,
    /// Size of the searched guess pool
    pub pool_size: usize,
    pub hard_mode: bool,
    pub guess: GuessResult,
    /// Partition details for the recommended word
    pub metrics: Option<GuessMetrics>,
    /// Whether the recommended word could itself be the answer
    pub is_candidate: bool,
    pub duration: Duration,
}

impl HintResult {
    /// Recommended word as text
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.guess.word.as_ref().map(|w| w.text())
    }
}

/// Search for the most informative next guess
///
/// `progress` receives one tick per evaluated pool word; pass
/// `ProgressBar::hidden()` for silent runs.
#[must_use]
pub fn best_hint(
    solver: &Solver<'_>,
    rows: &[Row],
    hard_mode: bool,
    progress: &ProgressBar,
) -> HintResult {
    let start = Instant::now();

    let candidates = solver.candidates(rows);
    let pool_size = guess_pool(&candidates, rows, hard_mode, solver.guess_words()).len();
    let guess = solver.best_guess_with_progress(rows, hard_mode, progress);

    let metrics = guess
        .word
        .as_ref()
        .map(|word| evaluate_guess(word, &candidates));
    let is_candidate = guess
        .word
        .as_ref()
        .is_some_and(|word| candidates.contains(&word));

    HintResult {
        remaining: candidates.len(),
        pool_size,
        hard_mode,
        guess,
        metrics,
        is_candidate,
        duration: start.elapsed(),
    }
}
