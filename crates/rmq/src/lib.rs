mod block;
mod config;
mod error;
mod full_table;
mod linear_scan;
mod measure;
mod util;
mod workload;

use std::hint::black_box;
use std::time::Duration;

pub use block::BlockDecomposition;
pub use config::{BlockScan, REPEAT, RunConfig};
pub use error::RmqError;
pub use full_table::FullTable;
pub use linear_scan::LinearScan;
pub use measure::measure;
pub use workload::{Query, Workload};

/// Static RMQ (Range Minimum Query) strategy.
///
/// - Query ranges are closed: `[i, j]` with `i <= j < len()`.
/// - The answer is the minimum value, not its position.
/// - `query` on an invalid range is a precondition violation; use
///   [`RmqStrategy::checked_query`] to get an error instead.
/// - `preprocess` takes its own copy of the values; `rebuild` recomputes the
///   derived structure from that copy and nothing else.
pub trait RmqStrategy: Sized {
    /// Short name used in result files and logs.
    const NAME: &'static str;
    /// Whether `run` times the preprocessing phase. Strategies without a
    /// structure report zero.
    const TIMES_PREPROCESSING: bool;

    fn preprocess(values: &[i64], config: &RunConfig) -> Self;
    fn rebuild(&mut self);
    fn len(&self) -> usize;
    fn query(&self, i: usize, j: usize) -> i64;

    fn checked_query(&self, i: usize, j: usize) -> Result<i64, RmqError> {
        let len = self.len();
        if i > j || j >= len {
            return Err(RmqError::InvalidQuery { i, j, len });
        }
        Ok(self.query(i, j))
    }
}

/// Outcome of one [`run`]: the answer to the last query answered and the
/// total wall-clock time of each phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    pub answer: i64,
    pub preprocess: Duration,
    pub query: Duration,
}

impl RunReport {
    pub fn preprocess_secs(&self) -> f64 {
        self.preprocess.as_secs_f64()
    }

    pub fn query_secs(&self) -> f64 {
        self.query.as_secs_f64()
    }
}

/// Generates a fresh workload of size `n` and benchmarks strategy `S` on it.
///
/// The structure is built once untimed, then rebuilt `config.repeat` times
/// and the total is reported. Every query of the batch is then answered once
/// against the last build. Workload generation is never timed.
pub fn run<S: RmqStrategy>(n: usize, config: &RunConfig) -> Result<RunReport, RmqError> {
    let mut rng = config.rng_for(n);
    let workload = Workload::generate(n, config.repeat, &mut rng)?;
    let mut structure = S::preprocess(&workload.values, config);

    let preprocess = if S::TIMES_PREPROCESSING {
        let ((), elapsed) = measure(config.repeat, || {
            structure.rebuild();
            black_box(&structure);
        });
        elapsed
    } else {
        Duration::ZERO
    };

    let (answer, query) = measure(1, || {
        let mut answer = 0;
        for q in workload.queries.iter().rev() {
            answer = black_box(structure.query(q.i, q.j));
        }
        answer
    });

    log::debug!(
        "{} n={n}: preprocess {:?}, query {:?}",
        S::NAME,
        preprocess,
        query
    );

    Ok(RunReport {
        answer,
        preprocess,
        query,
    })
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    Simple,
    Naive,
    Block,
}

pub const ALL_STRATEGIES: [Strategy; 3] = [Strategy::Simple, Strategy::Naive, Strategy::Block];

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => LinearScan::NAME,
            Self::Naive => FullTable::NAME,
            Self::Block => BlockDecomposition::NAME,
        }
    }

    pub fn run(self, n: usize, config: &RunConfig) -> Result<RunReport, RmqError> {
        match self {
            Self::Simple => run::<LinearScan>(n, config),
            Self::Naive => run::<FullTable>(n, config),
            Self::Block => run::<BlockDecomposition>(n, config),
        }
    }
}
