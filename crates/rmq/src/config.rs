use rand::SeedableRng;
use rand::rngs::StdRng;

/// Number of rebuilds and queries per run unless configured otherwise.
pub const REPEAT: usize = 1000;

const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// How [`BlockDecomposition`](crate::BlockDecomposition) scans the partial
/// blocks at either end of a query.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum BlockScan {
    /// Same-block queries scan `[i, j]`; otherwise the right partial block
    /// is scanned from its first index up to `j`.
    #[default]
    Corrected,
    /// Bit-for-bit behaviour of the historical benchmark: the right partial
    /// block is scanned from `j` to the end of its block, and a query that
    /// stays inside one block is scanned up to the end of that block.
    /// May return a value that is not the range minimum.
    Legacy,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunConfig {
    pub repeat: usize,
    pub seed: Option<u64>,
    pub block_scan: BlockScan,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            repeat: REPEAT,
            seed: None,
            block_scan: BlockScan::Corrected,
        }
    }
}

impl RunConfig {
    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_block_scan(mut self, block_scan: BlockScan) -> Self {
        self.block_scan = block_scan;
        self
    }

    /// RNG for the workload of a run at size `n`.
    ///
    /// With a seed, every strategy gets the same stream for the same `n`.
    pub fn rng_for(&self, n: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ (n as u64).wrapping_mul(SEED_MIX)),
            None => StdRng::from_os_rng(),
        }
    }
}
