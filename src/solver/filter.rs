//! Candidate filtering
//!
//! Applies every board row as an exact-feedback constraint over a word list.

use crate::core::{Row, Word};

/// Filter `corpus` to the words consistent with every row
///
/// A word survives when scoring each row's guess against it reproduces that
/// row's feedback exactly. Rows are ANDed, so their order does not matter.
/// The result keeps corpus order and may be empty when the board is
/// inconsistent with the word list.
///
/// # Examples
/// ```
/// use wordle_hint::core::{Row, Word};
/// use wordle_hint::solver::filter_candidates;
///
/// let corpus: Vec<Word> = ["piano", "phony", "phone", "ports", "spore"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let rows = [Row::parse("ports:21000").unwrap()];
///
/// let candidates = filter_candidates(&rows, &corpus);
/// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["piano", "phony", "phone"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(rows: &[Row], corpus: &'a [Word]) -> Vec<&'a Word> {
    corpus
        .iter()
        .filter(|&candidate| is_consistent(rows, candidate))
        .collect()
}

/// Check a single word against every row
#[inline]
#[must_use]
pub fn is_consistent(rows: &[Row], candidate: &Word) -> bool {
    rows.iter().all(|row| row.admits(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(candidates: &[&Word]) -> Vec<String> {
        candidates.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn no_rows_keeps_everything() {
        let corpus = words(&["piano", "phony", "phone"]);
        assert_eq!(filter_candidates(&[], &corpus).len(), 3);
    }

    #[test]
    fn ports_clue_example() {
        let corpus = words(&["piano", "phony", "phone", "ports", "spore"]);
        let rows = [Row::parse("ports:21000").unwrap()];

        let candidates = filter_candidates(&rows, &corpus);
        assert_eq!(texts(&candidates), ["piano", "phony", "phone"]);
    }

    #[test]
    fn rows_are_anded_and_order_independent() {
        let corpus = words(&["piano", "phony", "phone", "ports", "spore"]);
        let first = Row::parse("ports:21000").unwrap();
        // PHONE against PHONY: four correct, E absent
        let second = Row::parse("phone:22220").unwrap();

        let forward = filter_candidates(&[first.clone(), second.clone()], &corpus);
        let backward = filter_candidates(&[second, first], &corpus);

        assert_eq!(texts(&forward), ["phony"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn inconsistent_board_yields_empty() {
        let corpus = words(&["piano", "phony", "phone"]);
        let rows = [Row::parse("zzzzz:22222").unwrap()];
        assert!(filter_candidates(&rows, &corpus).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let corpus = words(&["piano", "phony", "phone", "ports", "spore"]);
        let rows = [Row::parse("ports:21000").unwrap()];

        let once: Vec<Word> = filter_candidates(&rows, &corpus)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_candidates(&rows, &once);

        assert_eq!(twice.len(), once.len());
        assert!(twice.iter().zip(&once).all(|(a, b)| *a == b));
    }

    #[test]
    fn result_is_subset_of_corpus() {
        let corpus = words(&["piano", "phony", "phone", "ports", "spore"]);
        let rows = [Row::parse("spore:01100").unwrap()];

        for candidate in filter_candidates(&rows, &corpus) {
            assert!(corpus.contains(candidate));
        }
    }
}
