use crate::RmqStrategy;
use crate::config::RunConfig;
use crate::util::fold_min;

/// No preprocessing; every query scans its range. `<O(1), O(n)>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearScan {
    values: Vec<i64>,
}

impl RmqStrategy for LinearScan {
    const NAME: &'static str = "simple";
    const TIMES_PREPROCESSING: bool = false;

    fn preprocess(values: &[i64], _config: &RunConfig) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    fn rebuild(&mut self) {}

    fn len(&self) -> usize {
        self.values.len()
    }

    fn query(&self, i: usize, j: usize) -> i64 {
        debug_assert!(i <= j && j < self.values.len());
        fold_min(self.values[i], &self.values[i + 1..=j])
    }
}
