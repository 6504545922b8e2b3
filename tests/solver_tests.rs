use wordle_hint::core::{FeedbackState, Pattern, Row, Word};
use wordle_hint::solver::{
    HardModeConstraints, Solver, best_information_guess, evaluate_guess, filter_candidates,
    is_hard_mode_valid,
};
use wordle_hint::wordlists::{parse_words, words_from_slice};

use FeedbackState::{Absent as A, Correct as C, Present as P};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn row(s: &str) -> Row {
    Row::parse(s).unwrap()
}

fn sample_corpus() -> Vec<Word> {
    words_from_slice(&["piano", "phony", "phone", "ports", "spore"])
}

#[test]
fn test_score_is_deterministic_and_self_match_is_perfect() {
    for w in ["piano", "sissy", "eerie", "abbey", "crane"] {
        let w = word(w);
        assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        assert_eq!(
            Pattern::calculate(&w, &word("phone")),
            Pattern::calculate(&w, &word("phone"))
        );
    }
}

#[test]
fn test_score_duplicate_letters() {
    let sissy = word("sissy");
    assert_eq!(
        Pattern::calculate(&sissy, &word("piano")).states(),
        [A, C, A, A, A]
    );
    assert_eq!(
        Pattern::calculate(&sissy, &word("phony")).states(),
        [A, A, A, A, C]
    );
    assert_eq!(
        Pattern::calculate(&sissy, &word("phone")).states(),
        [A; 5]
    );
    assert_eq!(
        Pattern::calculate(&word("eerie"), &word("abbey")).states(),
        [P, A, A, A, A]
    );
}

#[test]
fn test_filter_after_one_row() {
    let corpus = sample_corpus();
    let rows = [Row::from_states("ports", [C, P, A, A, A]).unwrap()];

    let texts: Vec<&str> = filter_candidates(&rows, &corpus)
        .iter()
        .map(|w| w.text())
        .collect();
    assert_eq!(texts, vec!["piano", "phony", "phone"]);
}

#[test]
fn test_filter_is_idempotent_subset() {
    let corpus = sample_corpus();
    let rows = [row("ports:21000")];

    let once: Vec<Word> = filter_candidates(&rows, &corpus)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<Word> = filter_candidates(&rows, &once)
        .into_iter()
        .cloned()
        .collect();

    assert_eq!(once, twice);
    assert!(once.iter().all(|w| corpus.contains(w)));
}

#[test]
fn test_filter_row_order_does_not_matter() {
    let corpus = sample_corpus();
    let forward = [row("ports:21000"), row("phone:22220")];
    let backward = [row("phone:22220"), row("ports:21000")];

    assert_eq!(
        filter_candidates(&forward, &corpus),
        filter_candidates(&backward, &corpus)
    );
    assert_eq!(filter_candidates(&forward, &corpus), vec![&word("phony")]);
}

#[test]
fn test_best_guess_after_one_row() {
    let corpus = sample_corpus();
    let rows = [row("ports:21000")];
    let candidates = filter_candidates(&rows, &corpus);

    let best = best_information_guess(&candidates, &rows, false, &corpus);
    assert_eq!(best.word, Some(word("phone")));
    assert!((best.expected_remaining - 1.0).abs() < 1e-9);
    assert!((best.info_gain - 2.0).abs() < 1e-9);
}

#[test]
fn test_ties_prefer_candidate_members() {
    // Every guess splits the two candidates apart; abczz sorts first but is
    // not a candidate
    let corpus = words_from_slice(&["abczz", "bbbbb", "ccccc"]);
    let candidates = vec![&corpus[1], &corpus[2]];

    for guess in &corpus {
        let metrics = evaluate_guess(guess, &candidates);
        assert_eq!(metrics.sum_of_squares, 2);
    }

    let best = best_information_guess(&candidates, &[], false, &corpus);
    assert_eq!(best.word, Some(word("bbbbb")));
}

#[test]
fn test_hard_mode_correct_position_is_fixed() {
    let rows = [row("crane:20000")];
    assert!(is_hard_mode_valid(&word("cloud"), &rows));
    assert!(!is_hard_mode_valid(&word("trace"), &rows));
}

#[test]
fn test_hard_mode_present_letter_must_move() {
    let rows = [row("ports:21000")];
    assert!(is_hard_mode_valid(&word("phone"), &rows));
    assert!(!is_hard_mode_valid(&word("poker"), &rows));
    assert!(!is_hard_mode_valid(&word("plumb"), &rows));
}

#[test]
fn test_hard_mode_minimum_counts_never_lowered() {
    let rows = [row("eeaaa:11000"), row("exxxx:10000")];
    let constraints = HardModeConstraints::from_rows(&rows);
    assert_eq!(constraints.min_count(b'e'), 2);

    assert!(is_hard_mode_valid(&word("zzeez"), &rows));
    assert!(!is_hard_mode_valid(&word("zzezz"), &rows));
}

#[test]
fn test_hard_mode_pool_is_restricted_to_candidates() {
    let corpus = words_from_slice(&["piano", "phony", "phone", "ports", "spore", "sissy"]);
    let rows = [row("ports:21000")];
    let candidates = filter_candidates(&rows, &corpus);

    let best = best_information_guess(&candidates, &rows, true, &corpus);
    let picked = best.word.unwrap();
    assert!(candidates.contains(&&picked));
    assert!(is_hard_mode_valid(&picked, &rows));
}

#[test]
fn test_empty_candidates_yield_no_word() {
    let corpus = sample_corpus();
    let best = best_information_guess(&[], &[], false, &corpus);

    assert!(best.word.is_none());
    assert!(best.expected_remaining.abs() < f64::EPSILON);
    assert!(best.info_gain.abs() < f64::EPSILON);
}

#[test]
fn test_empty_hard_mode_pool_yields_no_word() {
    let corpus = sample_corpus();
    let stray = word("zzzzz");
    let best = best_information_guess(&[&stray], &[row("ports:21000")], true, &corpus);

    assert!(best.word.is_none());
}

#[test]
fn test_parallel_search_is_stable() {
    let corpus = words_from_slice(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ]);
    let candidates: Vec<&Word> = corpus.iter().collect();

    let first = best_information_guess(&candidates, &[], false, &corpus);
    for _ in 0..5 {
        let again = best_information_guess(&candidates, &[], false, &corpus);
        assert_eq!(again.word, first.word);
    }
}

#[test]
fn test_solver_over_loaded_text() {
    let loaded = parse_words("# answers\npiano\nphony\n\nphone\nports\nspore\nphone\nbad!\n");
    assert_eq!(loaded.words.len(), 5);
    assert_eq!(loaded.duplicates, 1);
    assert_eq!(loaded.skipped, vec!["bad!".to_string()]);

    let solver = Solver::new(&loaded.words, &loaded.words);
    let rows = [row("ports:21000")];
    assert_eq!(solver.count_candidates(&rows), 3);
    assert_eq!(solver.best_guess(&rows, false).word, Some(word("phone")));
}
