//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_candidate_list, print_count_result, print_hint_result,
    print_random_result, print_score_result,
};
