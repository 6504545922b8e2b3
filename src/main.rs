//! Wordle Hint - CLI
//!
//! Enter the rows of a Wordle board and get the remaining candidates or the
//! guess that is expected to narrow them down the most.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use wordle_hint::{
    commands::{
        best_hint, count_candidates, list_candidates, random_hint, run_interactive, score_words,
    },
    core::{Row, Word},
    output::{
        formatters::search_progress_bar, print_board, print_candidate_list, print_count_result,
        print_hint_result, print_random_result, print_score_result,
    },
    solver::Solver,
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_hint",
    about = "Wordle board assistant: remaining candidates and the most informative next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer word list (one word per line)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Allowed-guess word list; defaults to the answer list
    #[arg(short = 'g', long, global = true)]
    guesses: Option<PathBuf>,

    /// Hard mode: hints must reuse every revealed letter
    #[arg(long, global = true)]
    hard: bool,

    /// Show search diagnostics and word-list details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive board session (default)
    Interactive,

    /// Count the remaining candidates
    Count {
        /// Board rows, e.g. ports:21000 or "ports GY---"
        rows: Vec<Row>,
    },

    /// Suggest a random remaining candidate
    Random {
        /// Board rows, e.g. ports:21000 or "ports GY---"
        rows: Vec<Row>,
    },

    /// Suggest the guess that minimizes expected remaining candidates
    Best {
        /// Board rows, e.g. ports:21000 or "ports GY---"
        rows: Vec<Row>,
    },

    /// List all remaining candidates
    All {
        /// Board rows, e.g. ports:21000 or "ports GY---"
        rows: Vec<Row>,
    },

    /// Show the feedback a guess gets against an answer
    Score {
        /// The guessed word
        guess: String,
        /// The answer word
        answer: String,
    },
}

/// Load one word list, warning about lines that were skipped
fn load_list(path: &Path, verbose: bool) -> Result<Vec<Word>> {
    let loaded = load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    if !loaded.skipped.is_empty() {
        eprintln!(
            "{}",
            format!(
                "⚠ Skipped {} invalid entries in {}",
                loaded.skipped.len(),
                path.display()
            )
            .yellow()
        );
        if verbose {
            for entry in &loaded.skipped {
                eprintln!("    {}", entry.bright_black());
            }
        }
    }
    if verbose && loaded.duplicates > 0 {
        eprintln!(
            "{}",
            format!("  Ignored {} duplicate entries", loaded.duplicates).bright_black()
        );
    }
    if loaded.words.is_empty() {
        bail!("Word list {} contains no valid 5-letter words", path.display());
    }

    Ok(loaded.words)
}

/// Load word lists based on the -w/-g flags
///
/// Returns (`answer_words`, `guess_words`)
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let Some(words_path) = &cli.words else {
        bail!("An answer word list is required: pass --words <FILE>");
    };

    let answers = load_list(words_path, cli.verbose)?;
    let guesses = match &cli.guesses {
        Some(path) => load_list(path, cli.verbose)?,
        None => answers.clone(),
    };

    if cli.verbose {
        eprintln!(
            "{}",
            format!(
                "Loaded {} answers, {} guesses",
                answers.len(),
                guesses.len()
            )
            .bright_black()
        );
    }

    Ok((answers, guesses))
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    match cli.command.take().unwrap_or(Commands::Interactive) {
        // Scoring needs no word lists
        Commands::Score { guess, answer } => {
            let result = score_words(&guess, &answer).context("Cannot score words")?;
            print_score_result(&result);
        }
        Commands::Interactive => with_solver(&cli, |solver| {
            run_interactive(solver, cli.hard, cli.verbose)?;
            Ok(())
        })?,
        Commands::Count { rows } => with_solver(&cli, |solver| {
            echo_rows(&rows, cli.verbose);
            print_count_result(&count_candidates(solver, &rows));
            Ok(())
        })?,
        Commands::Random { rows } => with_solver(&cli, |solver| {
            echo_rows(&rows, cli.verbose);
            print_random_result(&random_hint(solver, &rows, &mut rand::rng()));
            Ok(())
        })?,
        Commands::Best { rows } => with_solver(&cli, |solver| {
            echo_rows(&rows, cli.verbose);
            run_best_command(solver, &rows, cli.hard, cli.verbose);
            Ok(())
        })?,
        Commands::All { rows } => with_solver(&cli, |solver| {
            echo_rows(&rows, cli.verbose);
            print_candidate_list(&list_candidates(solver, &rows));
            Ok(())
        })?,
    }

    Ok(())
}

/// Load the word lists and run `f` against a solver over them
fn with_solver(cli: &Cli, f: impl FnOnce(&Solver<'_>) -> Result<()>) -> Result<()> {
    let (answer_words, guess_words) = load_wordlists(cli)?;
    f(&Solver::new(&answer_words, &guess_words))
}

fn echo_rows(rows: &[Row], verbose: bool) {
    if verbose {
        print_board(rows);
    }
}

fn run_best_command(solver: &Solver<'_>, rows: &[Row], hard_mode: bool, verbose: bool) {
    let candidates = solver.count_candidates(rows);
    let progress = search_progress_bar(solver.guess_words().len(), candidates);

    let hint = best_hint(solver, rows, hard_mode, &progress);
    progress.finish_and_clear();
    print_hint_result(&hint, verbose);
}
