//! Wordle solving algorithms
//!
//! Candidate filtering, hard-mode validity and the expected-remaining guess
//! search. Every function here is a pure computation over its inputs.

mod engine;
pub mod filter;
pub mod hard_mode;
pub mod search;

pub use engine::Solver;
pub use filter::{filter_candidates, is_consistent};
pub use hard_mode::{HardModeConstraints, is_hard_mode_valid};
pub use search::{
    GuessMetrics, GuessResult, best_information_guess, best_information_guess_with_progress,
    evaluate_guess, guess_pool, select_best_guess,
};
