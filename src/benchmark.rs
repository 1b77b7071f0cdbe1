//! Repeated independent runs and their summary statistics.
//!
//! A single GA run is stochastic, so instances are judged over many runs.
//! [`run_many`] executes them and [`Summary`] reduces their best fitness
//! values to mean, best and worst.

use crate::error::Error;
use crate::ga::{GaConfig, GaResult, GaRunner};
use crate::knapsack::Knapsack;
use tracing::info;

/// Mean, best (maximum) and worst (minimum) of a set of fitness values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub mean: f64,
    pub best: f64,
    pub worst: f64,
}

impl Summary {
    /// Summarises `values`. Returns `None` for an empty slice.
    pub fn from_fitness(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        let (total, best, worst) = rest
            .iter()
            .fold((first, first, first), |(total, best, worst), &v| {
                (total + v, best.max(v), worst.min(v))
            });
        Some(Self {
            mean: total / values.len() as f64,
            best,
            worst,
        })
    }

    /// Summarises the best fitness of each run.
    pub fn from_results(results: &[GaResult]) -> Option<Self> {
        let values: Vec<f64> = results.iter().map(|r| r.best_fitness).collect();
        Self::from_fitness(&values)
    }
}

/// Executes `runs` independent GA runs on `knapsack`.
///
/// When `config.seed` is `Some(s)`, run `i` is seeded with `s + i`, so the
/// whole batch is reproducible. With the `parallel` feature and
/// `config.parallel`, runs execute on rayon's pool; results keep run order.
pub fn run_many(
    knapsack: &Knapsack,
    config: &GaConfig,
    runs: usize,
) -> Result<Vec<GaResult>, Error> {
    config.validate()?;
    knapsack.validate()?;

    let run_config = |i: usize| {
        let mut c = config.clone();
        c.seed = config.seed.map(|s| s.wrapping_add(i as u64));
        c
    };

    let results = execute(knapsack, config.parallel, runs, run_config)?;
    if let Some(summary) = Summary::from_results(&results) {
        info!(
            runs,
            optimum = knapsack.optimum,
            mean = summary.mean,
            best = summary.best,
            worst = summary.worst,
            "benchmark complete"
        );
    }
    Ok(results)
}

#[cfg(feature = "parallel")]
fn execute<F>(
    knapsack: &Knapsack,
    parallel: bool,
    runs: usize,
    run_config: F,
) -> Result<Vec<GaResult>, Error>
where
    F: Fn(usize) -> GaConfig + Sync,
{
    use rayon::prelude::*;

    if parallel {
        // One run per task; evaluation inside a run stays sequential.
        (0..runs)
            .into_par_iter()
            .map(|i| GaRunner::run(knapsack, &run_config(i).with_parallel(false)))
            .collect()
    } else {
        (0..runs).map(|i| GaRunner::run(knapsack, &run_config(i))).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn execute<F>(
    knapsack: &Knapsack,
    _parallel: bool,
    runs: usize,
    run_config: F,
) -> Result<Vec<GaResult>, Error>
where
    F: Fn(usize) -> GaConfig,
{
    (0..runs).map(|i| GaRunner::run(knapsack, &run_config(i))).collect()
}
