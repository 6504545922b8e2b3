//! Hard-mode validity
//!
//! In hard mode every new guess must reuse what the board has revealed:
//! fixed letters stay fixed, present letters move, and each confirmed letter
//! appears at least as often as the board has shown it.

use crate::core::{FeedbackState, Row, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Constraints accumulated from all rows
///
/// Rebuilt from scratch for every evaluation; never stored across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardModeConstraints {
    /// Minimum number of occurrences required per letter
    min_counts: FxHashMap<u8, usize>,
    /// Letter fixed at each position, if any
    fixed: [Option<u8>; WORD_LENGTH],
    /// Letters known not to be at each position
    banned: [Vec<u8>; WORD_LENGTH],
}

impl HardModeConstraints {
    /// Scan all rows and build the constraint snapshot
    ///
    /// Minimum counts are taken per row (correct + present occurrences of the
    /// letter in that row) and then maxed across rows, so they only escalate.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut constraints = Self::default();

        for row in rows {
            let mut row_counts: FxHashMap<u8, usize> = FxHashMap::default();

            for (i, (&letter, state)) in row
                .guess()
                .chars()
                .iter()
                .zip(row.pattern().states())
                .enumerate()
            {
                match state {
                    FeedbackState::Correct => {
                        constraints.fixed[i] = Some(letter);
                        *row_counts.entry(letter).or_insert(0) += 1;
                    }
                    FeedbackState::Present => {
                        if !constraints.banned[i].contains(&letter) {
                            constraints.banned[i].push(letter);
                        }
                        *row_counts.entry(letter).or_insert(0) += 1;
                    }
                    FeedbackState::Absent => {}
                }
            }

            for (letter, count) in row_counts {
                let min = constraints.min_counts.entry(letter).or_insert(0);
                *min = (*min).max(count);
            }
        }

        constraints
    }

    /// Minimum required occurrences of `letter`
    #[must_use]
    pub fn min_count(&self, letter: u8) -> usize {
        self.min_counts.get(&letter).copied().unwrap_or(0)
    }

    /// Letter fixed at `position`, if any
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    /// Letters banned from `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn banned_at(&self, position: usize) -> &[u8] {
        &self.banned[position]
    }

    /// True when no row has revealed anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_counts.is_empty()
            && self.fixed.iter().all(Option::is_none)
            && self.banned.iter().all(Vec::is_empty)
    }

    /// Check a guess against the snapshot
    #[must_use]
    pub fn allows(&self, guess: &Word) -> bool {
        for (i, &letter) in guess.chars().iter().enumerate() {
            if self.fixed[i].is_some_and(|fixed| fixed != letter) {
                return false;
            }
            if self.banned[i].contains(&letter) {
                return false;
            }
        }

        self.min_counts
            .iter()
            .all(|(&letter, &count)| guess.count_of(letter) >= count)
    }
}

/// Check whether `guess` is playable in hard mode given the rows so far
///
/// # Examples
/// ```
/// use wordle_hint::core::{Row, Word};
/// use wordle_hint::solver::is_hard_mode_valid;
///
/// let rows = [Row::parse("ports:21000").unwrap()];
/// assert!(is_hard_mode_valid(&Word::new("phone").unwrap(), &rows));
/// // P must stay in place
/// assert!(!is_hard_mode_valid(&Word::new("spore").unwrap(), &rows));
/// // O cannot stay second
/// assert!(!is_hard_mode_valid(&Word::new("poker").unwrap(), &rows));
/// ```
#[must_use]
pub fn is_hard_mode_valid(guess: &Word, rows: &[Row]) -> bool {
    HardModeConstraints::from_rows(rows).allows(guess)
}
