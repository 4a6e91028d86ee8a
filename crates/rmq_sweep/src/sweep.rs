use rmq::{RmqError, RunConfig, Strategy};

use crate::output::Series;

const PROGRESS_EVERY: usize = 10;

/// Runs `strategy` once for every `n` in `2..max_n`.
pub fn sweep(strategy: Strategy, max_n: usize, config: &RunConfig) -> Result<Series, RmqError> {
    let mut series = Series::default();
    for n in 2..max_n {
        let report = strategy.run(n, config)?;
        series.push(n, report.preprocess_secs(), report.query_secs());
        if n % PROGRESS_EVERY == 0 {
            log::info!("{}: finished testing with N = {n}", strategy.name());
        }
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use rmq::{RunConfig, Strategy};

    use super::sweep;

    #[test]
    fn covers_every_size_below_the_bound() {
        let config = RunConfig::default().with_repeat(5).with_seed(1);
        let series = sweep(Strategy::Block, 12, &config).unwrap();
        assert_eq!(series.sizes, (2..12).collect::<Vec<_>>());
        assert_eq!(series.preprocess.len(), 10);
        assert_eq!(series.query.len(), 10);
        assert!(series.preprocess.iter().chain(&series.query).all(|&t| t >= 0.0));
    }

    #[test]
    fn simple_strategy_has_zero_preprocessing() {
        let config = RunConfig::default().with_repeat(5).with_seed(1);
        let series = sweep(Strategy::Simple, 6, &config).unwrap();
        assert!(series.preprocess.iter().all(|&t| t == 0.0));
    }

    #[test]
    fn bound_of_two_or_less_is_empty() {
        let config = RunConfig::default().with_repeat(5);
        assert!(sweep(Strategy::Naive, 2, &config).unwrap().is_empty());
        assert!(sweep(Strategy::Naive, 0, &config).unwrap().is_empty());
    }
}
