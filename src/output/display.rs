//! Display functions for command results

use super::formatters::{reduction_bar, row_tiles};
use crate::commands::{CandidateListResult, CountResult, HintResult, RandomResult, ScoreResult};
use crate::core::Row;
use colored::Colorize;

const NO_CANDIDATES: &str = "No candidates found. Double-check your board input.";

/// Number of candidates printed per line when listing
const WORDS_PER_LINE: usize = 10;

fn print_no_candidates() {
    println!("{}\n", NO_CANDIDATES.red().bold());
}

/// Print the rows entered so far as colored tiles
pub fn print_board(rows: &[Row]) {
    if rows.is_empty() {
        println!("{}\n", "(empty board)".bright_black());
        return;
    }
    println!();
    for (i, row) in rows.iter().enumerate() {
        println!(
            "  {} {}  {}",
            (i + 1).to_string().bright_black(),
            row_tiles(row),
            row.pattern().to_emoji()
        );
    }
    println!();
}

/// Print the remaining candidate count
pub fn print_count_result(result: &CountResult) {
    println!(
        "Remaining candidate words: {} {}\n",
        result.remaining.to_string().bright_yellow().bold(),
        format!("(of {})", result.total).bright_black()
    );
}

/// Print a random candidate pick
pub fn print_random_result(result: &RandomResult) {
    match &result.pick {
        Some(word) => println!(
            "Random candidate hint: {} (remaining: {})\n",
            word.to_uppercase().bright_yellow().bold(),
            result.remaining
        ),
        None => print_no_candidates(),
    }
}

/// Print every remaining candidate
pub fn print_candidate_list(result: &CandidateListResult) {
    if result.words.is_empty() {
        print_no_candidates();
        return;
    }

    println!(
        "{} ({}):",
        "All candidates".bright_cyan().bold(),
        result.remaining()
    );
    for chunk in result.words.chunks(WORDS_PER_LINE) {
        println!("  {}", chunk.join(", "));
    }
    println!();
}

/// Print the result of a best-guess search
pub fn print_hint_result(result: &HintResult, verbose: bool) {
    if result.remaining == 0 {
        print_no_candidates();
        return;
    }

    let Some(word) = result.word() else {
        println!("{}\n", "No valid hint word found for selected mode.".yellow().bold());
        return;
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Most-information guess: {}{}",
        word.to_uppercase().bright_yellow().bold(),
        if result.is_candidate {
            " (could be the answer)".green().to_string()
        } else {
            String::new()
        }
    );
    println!("{}", "─".repeat(60).cyan());

    let bar = reduction_bar(result.guess.info_gain, result.remaining, 30);
    println!(
        "  Info gain score:      [{}] {}",
        bar.green(),
        format!("{:.2}", result.guess.info_gain).bright_yellow()
    );
    println!(
        "  Expected remaining:   {:.2}",
        result.guess.expected_remaining
    );
    println!("  Candidates remaining: {}", result.remaining);
    println!(
        "  Hard mode:            {}",
        if result.hard_mode {
            "ON".green()
        } else {
            "OFF".yellow()
        }
    );

    if verbose {
        if let Some(metrics) = result.metrics {
            println!("  Feedback patterns:    {}", metrics.buckets);
            println!("  Worst case:           {} candidates", metrics.max_bucket);
        }
        println!("  Guess pool:           {} words", result.pool_size);
        println!(
            "  Search time:          {:.3}s",
            result.duration.as_secs_f64()
        );
    }
    println!();
}

/// Print the feedback for a scored pair
pub fn print_score_result(result: &ScoreResult) {
    let row = Row::new(result.guess.clone(), result.pattern);
    println!(
        "\n{} vs {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!(
        "  {}  {}  {}\n",
        row_tiles(&row),
        result.pattern.to_emoji(),
        result.pattern.to_digits().bright_black()
    );
}
