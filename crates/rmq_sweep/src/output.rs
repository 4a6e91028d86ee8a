use std::io::{self, Write};

use clap::ValueEnum;

/// Timings of one strategy across the sweep, indexed by position in `sizes`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub sizes: Vec<usize>,
    pub preprocess: Vec<f64>,
    pub query: Vec<f64>,
}

impl Series {
    pub fn push(&mut self, n: usize, preprocess: f64, query: f64) {
        self.sizes.push(n);
        self.preprocess.push(preprocess);
        self.query.push(query);
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Layout {
    /// Every preprocessing time, then every query time, one value per line.
    #[default]
    Lines,
    /// `n,preprocess,query` rows under a header.
    Columns,
}

pub fn write_series<W: Write>(out: &mut W, series: &Series, layout: Layout) -> io::Result<()> {
    match layout {
        Layout::Lines => {
            for v in series.preprocess.iter().chain(&series.query) {
                writeln!(out, "{v:.16}")?;
            }
        }
        Layout::Columns => {
            writeln!(out, "n,preprocess,query")?;
            for ((n, p), q) in series.sizes.iter().zip(&series.preprocess).zip(&series.query) {
                writeln!(out, "{n},{p:.16},{q:.16}")?;
            }
        }
    }
    Ok(())
}

pub fn file_name(strategy: &str) -> String {
    format!("rmq_{strategy}.csv")
}
