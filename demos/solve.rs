//! Example: generate one adversarial instance and run every strategy on it.
//!
//! Run with:
//! `cargo run --example solve`

use hamstar::{generate, Solver, StrategyKind};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let mut rng = StdRng::seed_from_u64(2024);
    let instance = generate(4, &mut rng).expect("n >= 1");

    println!("Graph with {} vertices:", instance.graph.len());
    print!("{}", instance.graph);
    println!("start = {}, end = {}", instance.start, instance.end);

    let solver = Solver::new();
    for kind in StrategyKind::ALL {
        let outcome = solver
            .execute_timed(&instance.graph, instance.start, instance.end, kind.name())
            .expect("generated instances satisfy every precondition");
        println!(
            "{:<17} found={:<5} in {:?}",
            kind.name(),
            outcome.found,
            outcome.elapsed
        );
    }
}
