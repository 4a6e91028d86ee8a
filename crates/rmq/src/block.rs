use crate::RmqStrategy;
use crate::config::{BlockScan, RunConfig};
use crate::util::fold_min;

/// Square-root decomposition: per-block minima plus scans of the partial
/// blocks at the ends of a query. `<O(n), O(sqrt(n))>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlockDecomposition {
    values: Vec<i64>,
    block_size: usize,
    block_min: Vec<i64>,
    scan: BlockScan,
}

fn block_minima_of(values: &[i64], block_size: usize) -> Vec<i64> {
    values
        .chunks(block_size)
        .map(|block| fold_min(block[0], &block[1..]))
        .collect()
}

impl BlockDecomposition {
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn num_blocks(&self) -> usize {
        self.block_min.len()
    }

    pub fn block_minima(&self) -> &[i64] {
        &self.block_min
    }

    #[inline]
    fn block_end(&self, block: usize) -> usize {
        ((block + 1) * self.block_size).min(self.values.len())
    }

    fn query_corrected(&self, i: usize, j: usize) -> i64 {
        let b = self.block_size;
        let (bi, bj) = (i / b, j / b);
        let values = &self.values;

        if bi == bj {
            return fold_min(values[i], &values[i + 1..=j]);
        }

        let mut answer = fold_min(values[i], &values[i + 1..self.block_end(bi)]);
        answer = fold_min(answer, &values[bj * b..=j]);
        fold_min(answer, &self.block_min[bi + 1..bj])
    }

    fn query_legacy(&self, i: usize, j: usize) -> i64 {
        let b = self.block_size;
        let (bi, bj) = (i / b, j / b);
        let values = &self.values;

        let min_i = fold_min(values[i], &values[i..self.block_end(bi)]);
        let min_j = fold_min(values[j], &values[j..self.block_end(bj)]);
        let answer = min_i.min(min_j);
        if bj > bi + 1 {
            fold_min(answer, &self.block_min[bi + 1..bj])
        } else {
            answer
        }
    }
}

impl RmqStrategy for BlockDecomposition {
    const NAME: &'static str = "block";
    const TIMES_PREPROCESSING: bool = true;

    fn preprocess(values: &[i64], config: &RunConfig) -> Self {
        let block_size = values.len().isqrt().max(1);
        Self {
            values: values.to_vec(),
            block_size,
            block_min: block_minima_of(values, block_size),
            scan: config.block_scan,
        }
    }

    fn rebuild(&mut self) {
        self.block_size = self.values.len().isqrt().max(1);
        self.block_min = block_minima_of(&self.values, self.block_size);
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn query(&self, i: usize, j: usize) -> i64 {
        debug_assert!(i <= j && j < self.values.len());
        match self.scan {
            BlockScan::Corrected => self.query_corrected(i, j),
            BlockScan::Legacy => self.query_legacy(i, j),
        }
    }
}
