// Choosing the one movie to show out of a candidate list.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::error::FlowError;

/// Pick one candidate uniformly at random. An empty list is `NoResults`.
pub fn pick_one<'a, T, R: Rng>(candidates: &'a [T], rng: &mut R) -> Result<&'a T, FlowError> {
    candidates.choose(rng).ok_or(FlowError::NoResults)
}

/// Take the top-ranked candidate, used for text search where the service
/// already orders by relevance.
pub fn first<T>(candidates: &[T]) -> Result<&T, FlowError> {
    candidates.first().ok_or(FlowError::NoResults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_is_no_results() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: [u8; 0] = [];
        assert!(matches!(pick_one(&empty, &mut rng), Err(FlowError::NoResults)));
        assert!(matches!(first(&empty), Err(FlowError::NoResults)));
    }

    #[test]
    fn singleton_always_returns_it() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(*pick_one(&["only"], &mut rng).unwrap(), "only");
        }
    }

    #[test]
    fn frequencies_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let items = [0usize, 1, 2, 3];
        let trials = 40_000;
        let mut counts = [0usize; 4];
        for _ in 0..trials {
            counts[*pick_one(&items, &mut rng).unwrap()] += 1;
        }
        let expected = trials / items.len();
        for (i, &count) in counts.iter().enumerate() {
            let drift = count.abs_diff(expected) as f64 / expected as f64;
            assert!(drift < 0.05, "item {i} drawn {count} times, expected ~{expected}");
        }
    }

    #[test]
    fn first_takes_the_head() {
        assert_eq!(*first(&[3, 1, 2]).unwrap(), 3);
    }
}
