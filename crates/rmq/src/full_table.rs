use crate::RmqStrategy;
use crate::config::RunConfig;

/// Dense `n x n` table of every range minimum. `<O(n^2), O(1)>`.
///
/// Row-major; only cells with `i <= j` are meaningful.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FullTable {
    n: usize,
    values: Vec<i64>,
    table: Vec<i64>,
}

fn build_table(values: &[i64]) -> Vec<i64> {
    let n = values.len();
    let mut table = vec![0_i64; n * n];

    for (i, &v) in values.iter().enumerate() {
        table[i * n + i] = v;
    }
    // Ranges of length k + 1 from the two overlapping ranges of length k.
    for k in 1..n {
        for i in 0..(n - k) {
            let left = table[i * n + (i + k - 1)];
            let down = table[(i + 1) * n + (i + k)];
            table[i * n + (i + k)] = left.min(down);
        }
    }
    table
}

impl FullTable {
    /// `min(values[i..=j])`, or `None` when `i > j` or out of range.
    pub fn entry(&self, i: usize, j: usize) -> Option<i64> {
        (i <= j && j < self.n).then(|| self.table[i * self.n + j])
    }
}

impl RmqStrategy for FullTable {
    const NAME: &'static str = "naive";
    const TIMES_PREPROCESSING: bool = true;

    fn preprocess(values: &[i64], _config: &RunConfig) -> Self {
        Self {
            n: values.len(),
            values: values.to_vec(),
            table: build_table(values),
        }
    }

    fn rebuild(&mut self) {
        self.table = build_table(&self.values);
    }

    fn len(&self) -> usize {
        self.n
    }

    #[inline]
    fn query(&self, i: usize, j: usize) -> i64 {
        debug_assert!(i <= j && j < self.n);
        self.table[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    use super::FullTable;
    use crate::{RmqStrategy, RunConfig};

    #[test]
    fn every_cell_matches_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0xDEAD_BEEF);
        for n in 1..=20 {
            let mut values: Vec<i64> = (0..n).collect();
            values.shuffle(&mut rng);
            let table = FullTable::preprocess(&values, &RunConfig::default());

            let n = n as usize;
            for i in 0..n {
                for j in i..n {
                    let expected = *values[i..=j].iter().min().unwrap();
                    assert_eq!(table.entry(i, j), Some(expected), "n={n} i={i} j={j}");
                }
            }
        }
    }

    #[test]
    fn rebuild_recomputes_the_table_from_scratch() {
        let values = [6, 2, 9, 4, 1];
        let mut table = FullTable::preprocess(&values, &RunConfig::default());
        let built = table.clone();
        table.table.fill(i64::MAX);
        table.rebuild();
        assert_eq!(table, built);
    }

    #[test]
    fn lower_triangle_is_not_exposed() {
        let table = FullTable::preprocess(&[4, 2, 7], &RunConfig::default());
        assert_eq!(table.entry(2, 1), None);
        assert_eq!(table.entry(0, 3), None);
        assert_eq!(table.entry(0, 2), Some(2));
    }

    #[test]
    fn known_queries() {
        let values = [3, 1, 4, 1, 5, 9, 2, 6];
        let table = FullTable::preprocess(&values, &RunConfig::default());
        assert_eq!(table.query(1, 4), 1);
        assert_eq!(table.query(5, 7), 2);
    }
}
