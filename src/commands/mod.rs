//! Command implementations

pub mod candidates;
pub mod hint;
pub mod interactive;
pub mod random;
pub mod score;

pub use candidates::{CandidateListResult, CountResult, count_candidates, list_candidates};
pub use hint::{HintResult, best_hint};
pub use interactive::{Board, SessionCommand, parse_command, run_interactive};
pub use random::{RandomResult, random_hint};
pub use score::{ScoreResult, score_words};
