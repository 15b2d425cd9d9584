#![cfg(feature = "parallel")]

use hamstar::experiment::{run, run_sequential, summarize, ExperimentConfig};
use hamstar::Solver;
use proptest::prelude::*;

fn answers(config: &ExperimentConfig, parallel: bool) -> Vec<(usize, usize, bool)> {
    let solver = Solver::new();
    let records = if parallel {
        run(&solver, config).unwrap()
    } else {
        run_sequential(&solver, config).unwrap()
    };
    records.iter().map(|r| (r.n, r.trial, r.found)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn parallel_trials_match_sequential(seed in any::<u64>(), trials in 1usize..6) {
        for strategy in ["exhaustive", "component-pruned", "dp"] {
            let config = ExperimentConfig {
                strategy: strategy.to_string(),
                sizes: vec![2, 3, 4],
                trials,
                seed: Some(seed),
            };
            prop_assert_eq!(answers(&config, true), answers(&config, false));
        }
    }
}

#[test]
fn summaries_agree_on_found_counts() {
    let config = ExperimentConfig {
        strategy: "dp".into(),
        sizes: vec![5, 6, 7],
        trials: 8,
        seed: Some(3),
    };
    let solver = Solver::new();
    let par = summarize(&run(&solver, &config).unwrap());
    let seq = summarize(&run_sequential(&solver, &config).unwrap());
    let counts = |s: &[hamstar::experiment::SizeSummary]| {
        s.iter().map(|x| (x.n, x.trials, x.found)).collect::<Vec<_>>()
    };
    assert_eq!(counts(&par), counts(&seq));
}
