use rand::Rng;
use rand::seq::SliceRandom;

use crate::RmqError;

/// Closed query range `[i, j]` with `i <= j`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Query {
    pub i: usize,
    pub j: usize,
}

impl Query {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { i: a, j: b }
        } else {
            Self { i: b, j: a }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Workload {
    pub values: Vec<i64>,
    pub queries: Vec<Query>,
}

impl Workload {
    /// Shuffled permutation of `0..n` plus `repeat` queries whose endpoints
    /// are drawn uniformly (with replacement) from `0..n`.
    pub fn generate<R: Rng + ?Sized>(n: usize, repeat: usize, rng: &mut R) -> Result<Self, RmqError> {
        if n < 2 {
            return Err(RmqError::ArrayTooSmall { len: n });
        }
        if repeat == 0 {
            return Err(RmqError::ZeroRepeat);
        }

        let mut values: Vec<i64> = (0..n as i64).collect();
        values.shuffle(rng);

        let mut queries = Vec::with_capacity(repeat);
        for _ in 0..repeat {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            queries.push(Query::new(a, b));
        }

        Ok(Self { values, queries })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{Query, Workload};
    use crate::RmqError;

    #[test]
    fn query_endpoints_are_ordered() {
        assert_eq!(Query::new(5, 2), Query { i: 2, j: 5 });
        assert_eq!(Query::new(2, 5), Query { i: 2, j: 5 });
        assert_eq!(Query::new(3, 3), Query { i: 3, j: 3 });
    }

    #[test]
    fn values_form_a_permutation() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for n in [2, 3, 10, 257] {
            let workload = Workload::generate(n, 16, &mut rng).unwrap();
            let mut sorted = workload.values.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..n as i64).collect::<Vec<_>>());
        }
    }

    #[test]
    fn queries_are_in_bounds_even_when_repeat_exceeds_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let workload = Workload::generate(3, 1000, &mut rng).unwrap();
        assert_eq!(workload.queries.len(), 1000);
        for q in &workload.queries {
            assert!(q.i <= q.j && q.j < 3, "{q:?}");
        }
    }

    #[test]
    fn same_seed_same_workload() {
        let a = Workload::generate(40, 50, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = Workload::generate(40, 50, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.values, b.values);
        assert_eq!(a.queries, b.queries);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(
            Workload::generate(0, 10, &mut rng).unwrap_err(),
            RmqError::ArrayTooSmall { len: 0 }
        );
        assert_eq!(
            Workload::generate(1, 10, &mut rng).unwrap_err(),
            RmqError::ArrayTooSmall { len: 1 }
        );
        assert_eq!(
            Workload::generate(5, 0, &mut rng).unwrap_err(),
            RmqError::ZeroRepeat
        );
    }
}
