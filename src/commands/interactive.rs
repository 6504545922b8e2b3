//! Interactive board session
//!
//! Line-oriented stand-in for the clickable board: the player types each
//! completed row and asks for counts, hints or the candidate list.

use super::candidates::{count_candidates, list_candidates};
use super::hint::best_hint;
use super::random::random_hint;
use crate::core::{Row, RowError};
use crate::output::display::{
    print_board, print_candidate_list, print_count_result, print_hint_result, print_random_result,
};
use crate::output::formatters::search_progress_bar;
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Maximum rows on a Wordle board
pub const MAX_ROWS: usize = 6;

/// Mutable board state owned by the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
    hard_mode: bool,
}

impl Board {
    /// Start a board with the given hard-mode setting
    #[must_use]
    pub const fn new(hard_mode: bool) -> Self {
        Self {
            rows: Vec::new(),
            hard_mode,
        }
    }

    /// Rows entered so far, in order
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rows.len() >= MAX_ROWS
    }

    /// Append a row; returns `false` if the board is already full
    pub fn push(&mut self, row: Row) -> bool {
        if self.is_full() {
            return false;
        }
        self.rows.push(row);
        true
    }

    /// Remove the last row
    pub fn undo(&mut self) -> Option<Row> {
        self.rows.pop()
    }

    /// Clear all rows, keeping the hard-mode setting
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Flip hard mode and return the new setting
    pub const fn toggle_hard_mode(&mut self) -> bool {
        self.hard_mode = !self.hard_mode;
        self.hard_mode
    }
}

/// A parsed line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    AddRow(Row),
    Count,
    Random,
    Best,
    All,
    Board,
    ToggleHard,
    Undo,
    New,
    Help,
    Quit,
}

/// Parse one line of input
///
/// Keywords are matched case-insensitively; anything else is read as a row.
///
/// # Errors
///
/// Returns `RowError` when the line is neither a keyword nor a valid row.
pub fn parse_command(input: &str) -> Result<SessionCommand, RowError> {
    let command = match input.trim().to_lowercase().as_str() {
        "count" | "c" => SessionCommand::Count,
        "random" | "r" => SessionCommand::Random,
        "best" | "b" | "hint" => SessionCommand::Best,
        "all" | "a" | "list" => SessionCommand::All,
        "board" | "show" => SessionCommand::Board,
        "hard" | "h" => SessionCommand::ToggleHard,
        "undo" | "u" => SessionCommand::Undo,
        "new" | "n" | "reset" => SessionCommand::New,
        "help" | "?" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::AddRow(Row::parse(input)?),
    };
    Ok(command)
}

fn print_help() {
    println!("Enter each completed row as '<guess> <feedback>', for example:");
    println!("  ports 21000      (2 = correct, 1 = present, 0 = absent)");
    println!("  ports GY---      (G/Y/- or 🟩🟨⬜ also work)\n");
    println!("Commands:");
    println!("  count   number of remaining candidates");
    println!("  random  a random remaining candidate");
    println!("  best    the guess that leaves the fewest candidates on average");
    println!("  all     list every remaining candidate");
    println!("  board   show the rows entered so far");
    println!("  hard    toggle hard mode");
    println!("  undo    remove the last row");
    println!("  new     clear the board");
    println!("  quit    exit\n");
}

/// Run the interactive session on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_interactive(solver: &Solver<'_>, hard_mode: bool, verbose: bool) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Hint - Interactive Board              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Loaded {} answer words and {} guess words.",
        solver.answer_words().len(),
        solver.guess_words().len()
    );
    print_help();

    let mut board = Board::new(hard_mode);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let mode = if board.hard_mode() { " hard" } else { "" };
        print!("{} ", format!("[row {}{mode}]>", board.rows().len() + 1).bright_cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {e}\n", "❌".red());
                continue;
            }
        };

        match command {
            SessionCommand::AddRow(row) => {
                if board.push(row) {
                    print_board(board.rows());
                    if board.rows().last().is_some_and(|r| r.pattern().is_perfect()) {
                        println!("{}\n", "🎉 Solved! Type 'new' to start over.".green().bold());
                    }
                } else {
                    println!("Board is full ({MAX_ROWS} rows). Use 'undo' or 'new'.\n");
                }
            }
            SessionCommand::Count => print_count_result(&count_candidates(solver, board.rows())),
            SessionCommand::Random => {
                print_random_result(&random_hint(solver, board.rows(), &mut rand::rng()));
            }
            SessionCommand::Best => {
                let candidates = solver.count_candidates(board.rows());
                let progress = search_progress_bar(solver.guess_words().len(), candidates);
                let hint = best_hint(solver, board.rows(), board.hard_mode(), &progress);
                progress.finish_and_clear();
                print_hint_result(&hint, verbose);
            }
            SessionCommand::All => print_candidate_list(&list_candidates(solver, board.rows())),
            SessionCommand::Board => print_board(board.rows()),
            SessionCommand::ToggleHard => {
                let on = board.toggle_hard_mode();
                println!("Hard mode: {}\n", if on { "ON".green() } else { "OFF".yellow() });
            }
            SessionCommand::Undo => match board.undo() {
                Some(row) => println!("✓ Removed {}\n", row.guess().text().to_uppercase()),
                None => println!("Nothing to undo!\n"),
            },
            SessionCommand::New => {
                board.clear();
                println!("\n🔄 Board cleared!\n");
            }
            SessionCommand::Help => print_help(),
            SessionCommand::Quit => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keywords() {
        assert_eq!(parse_command("count"), Ok(SessionCommand::Count));
        assert_eq!(parse_command(" BEST "), Ok(SessionCommand::Best));
        assert_eq!(parse_command("q"), Ok(SessionCommand::Quit));
        assert_eq!(parse_command("hard"), Ok(SessionCommand::ToggleHard));
    }

    #[test]
    fn parse_rows() {
        assert_eq!(
            parse_command("ports 21000"),
            Ok(SessionCommand::AddRow(Row::parse("ports:21000").unwrap()))
        );
        assert!(parse_command("ports 2100").is_err());
        assert!(parse_command("hello").is_err());
    }

    #[test]
    fn board_push_undo_clear() {
        let mut board = Board::new(false);
        assert!(board.push(Row::parse("ports:21000").unwrap()));
        assert!(board.push(Row::parse("phone:22220").unwrap()));
        assert_eq!(board.rows().len(), 2);

        let undone = board.undo().unwrap();
        assert_eq!(undone.guess().text(), "phone");
        assert_eq!(board.rows().len(), 1);

        board.clear();
        assert!(board.rows().is_empty());
        assert!(board.undo().is_none());
    }

    #[test]
    fn board_caps_at_six_rows() {
        let mut board = Board::new(false);
        for _ in 0..MAX_ROWS {
            assert!(board.push(Row::parse("ports:00000").unwrap()));
        }
        assert!(board.is_full());
        assert!(!board.push(Row::parse("ports:00000").unwrap()));
        assert_eq!(board.rows().len(), MAX_ROWS);
    }

    #[test]
    fn hard_mode_toggle_survives_clear() {
        let mut board = Board::new(false);
        assert!(board.toggle_hard_mode());
        board.push(Row::parse("ports:21000").unwrap());
        board.clear();
        assert!(board.hard_mode());
        assert!(!board.toggle_hard_mode());
    }
}
