//! Candidate count and listing commands

use crate::core::Row;
use crate::solver::Solver;

/// Number of answers still consistent with the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountResult {
    pub remaining: usize,
    pub total: usize,
}

/// Every answer still consistent with the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateListResult {
    pub words: Vec<String>,
    pub total: usize,
}

impl CandidateListResult {
    /// Number of listed candidates
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

/// Count the remaining candidates
#[must_use]
pub fn count_candidates(solver: &Solver<'_>, rows: &[Row]) -> CountResult {
    CountResult {
        remaining: solver.count_candidates(rows),
        total: solver.answer_words().len(),
    }
}

/// List the remaining candidates in answer-list order
#[must_use]
pub fn list_candidates(solver: &Solver<'_>, rows: &[Row]) -> CandidateListResult {
    CandidateListResult {
        words: solver
            .candidates(rows)
            .iter()
            .map(|w| w.text().to_string())
            .collect(),
        total: solver.answer_words().len(),
    }
}
