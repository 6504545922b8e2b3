//! Formatting utilities for terminal output

use crate::core::{FeedbackState, Row};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Pool × candidate evaluations above which the search shows a progress bar
pub const PROGRESS_THRESHOLD: u64 = 2_000_000;

/// Render one letter as a colored board tile
#[must_use]
pub fn tile(letter: u8, state: FeedbackState) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match state {
        FeedbackState::Correct => text.black().on_green().bold(),
        FeedbackState::Present => text.black().on_yellow().bold(),
        FeedbackState::Absent => text.white().on_bright_black(),
    }
}

/// Render a row as five colored tiles
#[must_use]
pub fn row_tiles(row: &Row) -> String {
    row.guess()
        .chars()
        .iter()
        .zip(row.pattern().states())
        .map(|(&letter, state)| tile(letter, state).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing what share of the candidates a guess is expected to eliminate
#[must_use]
pub fn reduction_bar(info_gain: f64, remaining: usize, width: usize) -> String {
    create_progress_bar(info_gain, remaining as f64, width)
}

/// Progress bar for a best-guess search
///
/// Hidden when the search is small enough to finish instantly.
#[must_use]
pub fn search_progress_bar(pool_size: usize, candidates: usize) -> ProgressBar {
    let work = pool_size as u64 * candidates as u64;
    if work < PROGRESS_THRESHOLD {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(pool_size as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} guesses ({percent}%) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("vs {candidates} candidates"));
    pb
}
