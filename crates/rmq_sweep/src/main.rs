mod output;
mod sweep;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rmq::{ALL_STRATEGIES, BlockScan, REPEAT, RunConfig, Strategy};

use crate::output::{Layout, file_name, write_series};
use crate::sweep::sweep;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum StrategyArg {
    Simple,
    Naive,
    Block,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Simple => Strategy::Simple,
            StrategyArg::Naive => Strategy::Naive,
            StrategyArg::Block => Strategy::Block,
        }
    }
}

/// Times the linear-scan, full-table and block RMQ strategies for growing
/// array sizes and writes one result file per strategy.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Exclusive upper bound of the array sizes; sizes start at 2.
    #[arg(long, default_value_t = 200)]
    max_n: usize,

    /// Preprocessing rebuilds and queries per run.
    #[arg(long, default_value_t = REPEAT)]
    repeat: usize,

    /// Seed the workloads so every strategy sees the same input for each size.
    #[arg(long)]
    seed: Option<u64>,

    /// Reproduce the historical block query scan, which can return wrong minima.
    #[arg(long)]
    legacy_block_scan: bool,

    /// Strategies to run; all of them when omitted.
    #[arg(long = "strategy", value_enum)]
    strategies: Vec<StrategyArg>,

    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Layout::Lines)]
    layout: Layout,
}

impl Args {
    fn run_config(&self) -> RunConfig {
        let mut config = RunConfig::default().with_repeat(self.repeat);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.legacy_block_scan {
            config = config.with_block_scan(BlockScan::Legacy);
        }
        config
    }

    fn strategies(&self) -> Vec<Strategy> {
        if self.strategies.is_empty() {
            ALL_STRATEGIES.to_vec()
        } else {
            self.strategies.iter().copied().map(Strategy::from).collect()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::new()
        .filter_or("RMQ_LOG", "info")
        .write_style("RMQ_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();
    let config = args.run_config();
    log::debug!("sweep arguments: {args:?}");

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for strategy in args.strategies() {
        let series = sweep(strategy, args.max_n, &config)
            .with_context(|| format!("{} sweep", strategy.name()))?;

        let path = args.out_dir.join(file_name(strategy.name()));
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_series(&mut out, &series, args.layout)
            .and_then(|()| out.flush())
            .with_context(|| format!("writing {}", path.display()))?;

        log::info!("{}: wrote {} sizes to {}", strategy.name(), series.len(), path.display());
    }

    Ok(())
}
