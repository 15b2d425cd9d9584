//! Timing experiments: generate instances, solve them, record wall time.
//!
//! Each trial draws its instance from its own `StdRng` seeded by
//! `(seed, n, trial)`, so results do not depend on execution order and the
//! `parallel` feature changes throughput only. Generation is never timed.

use crate::error::Result;
use crate::generator::generate;
use crate::solver::{Solver, StrategyKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

/// What to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Strategy name as registered in the [`Solver`].
    pub strategy: String,
    /// Block sizes `n`; each instance has `3n` vertices.
    pub sizes: Vec<usize>,
    /// Trials per size.
    pub trials: usize,
    /// Base seed. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        let kind = StrategyKind::SubsetDp;
        Self {
            strategy: kind.name().to_string(),
            sizes: kind.default_sizes().to_vec(),
            trials: 1,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Config for `strategy` with its default sizes when `strategy` names a
    /// bundled strategy, and no sizes otherwise.
    pub fn for_strategy(strategy: &str) -> Self {
        let sizes = strategy
            .parse::<StrategyKind>()
            .map(|kind| kind.default_sizes().to_vec())
            .unwrap_or_default();
        Self {
            strategy: strategy.to_string(),
            sizes,
            ..Self::default()
        }
    }
}

/// One solved trial.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialRecord {
    pub strategy: String,
    pub n: usize,
    /// 1-based trial index within its size.
    pub trial: usize,
    pub found: bool,
    pub elapsed_secs: f64,
}

/// Aggregate over all trials of one size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SizeSummary {
    pub n: usize,
    pub trials: usize,
    pub found: usize,
    pub min_secs: f64,
    pub mean_secs: f64,
    pub max_secs: f64,
}

/// Seed for one trial; a SplitMix64-style mix of the base seed and indices.
pub fn trial_seed(base: u64, n: usize, trial: usize) -> u64 {
    let mut z = base
        ^ (n as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (trial as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn run_trial(solver: &Solver, strategy: &str, base: u64, n: usize, trial: usize) -> Result<TrialRecord> {
    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("trial", n, trial);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut rng = StdRng::seed_from_u64(trial_seed(base, n, trial));
    let instance = generate(n, &mut rng)?;
    let outcome = solver.execute_timed(&instance.graph, instance.start, instance.end, strategy)?;
    Ok(TrialRecord {
        strategy: strategy.to_string(),
        n,
        trial,
        found: outcome.found,
        elapsed_secs: outcome.elapsed.as_secs_f64(),
    })
}

fn jobs(config: &ExperimentConfig) -> Vec<(usize, usize)> {
    config
        .sizes
        .iter()
        .flat_map(|&n| (1..=config.trials).map(move |trial| (n, trial)))
        .collect()
}

fn base_seed(config: &ExperimentConfig) -> u64 {
    config.seed.unwrap_or_else(rand::random)
}

/// Runs every trial one after another. Records come back grouped by size,
/// in trial order.
pub fn run_sequential(solver: &Solver, config: &ExperimentConfig) -> Result<Vec<TrialRecord>> {
    solver.strategy(&config.strategy)?;
    let base = base_seed(config);
    jobs(config)
        .into_iter()
        .map(|(n, trial)| run_trial(solver, &config.strategy, base, n, trial))
        .collect()
}

/// Runs every trial, on the rayon pool when the `parallel` feature is
/// enabled. Record order matches [`run_sequential`].
#[cfg(feature = "parallel")]
pub fn run(solver: &Solver, config: &ExperimentConfig) -> Result<Vec<TrialRecord>> {
    solver.strategy(&config.strategy)?;
    let base = base_seed(config);
    jobs(config)
        .into_par_iter()
        .map(|(n, trial)| run_trial(solver, &config.strategy, base, n, trial))
        .collect()
}

/// Runs every trial; without the `parallel` feature this is [`run_sequential`].
#[cfg(not(feature = "parallel"))]
pub fn run(solver: &Solver, config: &ExperimentConfig) -> Result<Vec<TrialRecord>> {
    run_sequential(solver, config)
}

/// Per-size aggregates in order of first appearance.
pub fn summarize(records: &[TrialRecord]) -> Vec<SizeSummary> {
    let mut summaries: Vec<SizeSummary> = Vec::new();
    let mut totals: Vec<f64> = Vec::new();
    for record in records {
        let idx = match summaries.iter().position(|s| s.n == record.n) {
            Some(idx) => idx,
            None => {
                summaries.push(SizeSummary {
                    n: record.n,
                    trials: 0,
                    found: 0,
                    min_secs: f64::INFINITY,
                    mean_secs: 0.0,
                    max_secs: 0.0,
                });
                totals.push(0.0);
                summaries.len() - 1
            }
        };
        let summary = &mut summaries[idx];
        summary.trials += 1;
        summary.found += usize::from(record.found);
        summary.min_secs = summary.min_secs.min(record.elapsed_secs);
        summary.max_secs = summary.max_secs.max(record.elapsed_secs);
        totals[idx] += record.elapsed_secs;
    }
    for (summary, total) in summaries.iter_mut().zip(totals) {
        summary.mean_secs = total / summary.trials as f64;
    }
    summaries
}
