//! Best-guess search
//!
//! Every guess in the pool partitions the candidates by the pattern it would
//! produce. For a uniformly random answer the expected number of candidates
//! left afterwards is Σ bucket² / |candidates|; the search picks the guess
//! that minimizes it.

use super::hard_mode::HardModeConstraints;
use crate::core::{Pattern, Row, Word};
use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;

/// Partition statistics for one guess against a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Sum of squared bucket sizes (exact ranking key)
    pub sum_of_squares: u64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// |candidates| − `expected_remaining`
    pub info_gain: f64,
    /// Number of distinct patterns the guess can produce
    pub buckets: usize,
    /// Largest bucket (worst-case remaining candidates)
    pub max_bucket: usize,
}

/// Outcome of the best-guess search
#[derive(Debug, Clone, PartialEq)]
pub struct GuessResult {
    /// Recommended guess, or `None` when nothing could be recommended
    pub word: Option<Word>,
    /// |candidates| − `expected_remaining`
    pub info_gain: f64,
    /// Expected number of remaining candidates after playing `word`
    pub expected_remaining: f64,
}

impl GuessResult {
    /// Result for an empty pool or an empty candidate set
    #[must_use]
    pub const fn none() -> Self {
        Self {
            word: None,
            info_gain: 0.0,
            expected_remaining: 0.0,
        }
    }
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Compute partition metrics for a single guess
///
/// Empty candidate sets produce all-zero metrics.
///
/// # Examples
/// ```
/// use wordle_hint::core::Word;
/// use wordle_hint::solver::evaluate_guess;
///
/// let candidates: Vec<Word> = ["piano", "phony", "phone"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// let metrics = evaluate_guess(&Word::new("phone").unwrap(), &refs);
/// assert_eq!(metrics.buckets, 3);
/// assert!((metrics.expected_remaining - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn evaluate_guess(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            sum_of_squares: 0,
            expected_remaining: 0.0,
            info_gain: 0.0,
            buckets: 0,
            max_bucket: 0,
        };
    }

    let groups = group_by_pattern(guess, candidates);

    let sum_of_squares: u64 = groups.values().map(|&n| (n as u64) * (n as u64)).sum();
    let total = candidates.len() as f64;
    let expected_remaining = sum_of_squares as f64 / total;

    GuessMetrics {
        sum_of_squares,
        expected_remaining,
        info_gain: total - expected_remaining,
        buckets: groups.len(),
        max_bucket: groups.values().copied().max().unwrap_or(0),
    }
}

/// A scored pool entry
struct Scored<'a> {
    word: &'a Word,
    metrics: GuessMetrics,
    is_candidate: bool,
}

/// Total ranking order: `Less` means `a` is the better guess
///
/// Lower expected remaining first (compared exactly through the sum of
/// squares, which shares the candidate-count denominator), then guesses that
/// could be the answer, then lexicographic order.
fn rank(a: &Scored<'_>, b: &Scored<'_>) -> Ordering {
    a.metrics
        .sum_of_squares
        .cmp(&b.metrics.sum_of_squares)
        .then_with(|| b.is_candidate.cmp(&a.is_candidate))
        .then_with(|| a.word.cmp(b.word))
}

/// Select the best guess from an explicit pool
///
/// Returns the chosen word with its metrics, or `None` if the pool is empty.
/// Evaluation runs in parallel; the reduction follows [`rank`], so the choice
/// is identical to a sequential scan.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
    progress: &ProgressBar,
) -> Option<(&'a Word, GuessMetrics)> {
    let candidate_set: FxHashSet<&Word> = candidates.iter().copied().collect();

    guess_pool
        .par_iter()
        .progress_with(progress.clone())
        .map(|&word| Scored {
            word,
            metrics: evaluate_guess(word, candidates),
            is_candidate: candidate_set.contains(word),
        })
        .min_by(rank)
        .map(|best| (best.word, best.metrics))
}

/// The guess pool for a search
///
/// Normal mode searches the whole corpus; hard mode restricts the pool to
/// candidates that still satisfy every revealed constraint.
#[must_use]
pub fn guess_pool<'a>(
    candidates: &[&'a Word],
    rows: &[Row],
    hard_mode: bool,
    corpus: &'a [Word],
) -> Vec<&'a Word> {
    if hard_mode {
        let constraints = HardModeConstraints::from_rows(rows);
        candidates
            .iter()
            .copied()
            .filter(|word| constraints.allows(word))
            .collect()
    } else {
        corpus.iter().collect()
    }
}

/// Find the guess that minimizes expected remaining candidates
///
/// Ties prefer a guess that is itself a candidate, then the lexicographically
/// smaller word. Returns a result with `word = None` when the guess pool or
/// the candidate set is empty.
///
/// # Examples
/// ```
/// use wordle_hint::core::{Row, Word};
/// use wordle_hint::solver::best_information_guess;
///
/// let corpus: Vec<Word> = ["piano", "phony", "phone", "sissy"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = corpus[..3].iter().collect();
/// let rows = [Row::parse("ports:21000").unwrap()];
///
/// let best = best_information_guess(&candidates, &rows, false, &corpus);
/// assert_eq!(best.word.unwrap().text(), "phone");
/// assert!((best.expected_remaining - 1.0).abs() < f64::EPSILON);
/// assert!((best.info_gain - 2.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn best_information_guess(
    candidates: &[&Word],
    rows: &[Row],
    hard_mode: bool,
    corpus: &[Word],
) -> GuessResult {
    best_information_guess_with_progress(
        candidates,
        rows,
        hard_mode,
        corpus,
        &ProgressBar::hidden(),
    )
}

/// [`best_information_guess`] reporting pool progress to `progress`
///
/// The bar's length is set to the pool size before the scan starts.
#[must_use]
pub fn best_information_guess_with_progress(
    candidates: &[&Word],
    rows: &[Row],
    hard_mode: bool,
    corpus: &[Word],
    progress: &ProgressBar,
) -> GuessResult {
    if candidates.is_empty() {
        return GuessResult::none();
    }

    let pool = guess_pool(candidates, rows, hard_mode, corpus);
    progress.set_length(pool.len() as u64);

    select_best_guess(&pool, candidates, progress).map_or_else(GuessResult::none, |(word, m)| {
        GuessResult {
            word: Some(word.clone()),
            info_gain: m.info_gain,
            expected_remaining: m.expected_remaining,
        }
    })
}
