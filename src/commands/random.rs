//! Random candidate command
//!
//! Picks one remaining answer uniformly at random, for players who just want
//! a plausible word rather than the most informative one.

use crate::core::Row;
use crate::solver::Solver;
use rand::Rng;

/// A random pick among the remaining candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomResult {
    /// The chosen word, `None` if nothing remains
    pub pick: Option<String>,
    pub remaining: usize,
}

/// Pick a random remaining candidate with the given RNG
pub fn random_hint<R: Rng + ?Sized>(
    solver: &Solver<'_>,
    rows: &[Row],
    rng: &mut R,
) -> RandomResult {
    RandomResult {
        pick: solver
            .random_candidate(rows, rng)
            .map(|w| w.text().to_string()),
        remaining: solver.count_candidates(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pick_comes_from_candidates() {
        let words = words_from_slice(&["piano", "phony", "phone", "ports", "spore"]);
        let solver = Solver::new(&words, &words);
        let rows = [Row::parse("ports:21000").unwrap()];
        let mut rng = StdRng::seed_from_u64(42);

        let result = random_hint(&solver, &rows, &mut rng);
        assert_eq!(result.remaining, 3);
        let pick = result.pick.unwrap();
        assert!(["piano", "phony", "phone"].contains(&pick.as_str()));
    }

    #[test]
    fn no_candidates_no_pick() {
        let words = words_from_slice(&["piano"]);
        let solver = Solver::new(&words, &words);
        let rows = [Row::parse("ports:21000").unwrap(), Row::parse("piano:00000").unwrap()];
        let mut rng = StdRng::seed_from_u64(42);

        let result = random_hint(&solver, &rows, &mut rng);
        assert_eq!(result.remaining, 0);
        assert!(result.pick.is_none());
    }
}
