//! On generator output every block has exactly `n` vertices and no edges
//! leave it, so a path through `n` vertices is a path through the whole
//! component: all three strategies must agree there.

use hamstar::{generate, Solver};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn strategies_agree_on_generated_instances(n in 1usize..=5, seed in any::<u64>()) {
        let inst = generate(n, &mut StdRng::seed_from_u64(seed)).unwrap();
        let solver = Solver::new();
        let exhaustive = solver.execute(&inst.graph, inst.start, inst.end, "exhaustive").unwrap();
        let pruned = solver.execute(&inst.graph, inst.start, inst.end, "component-pruned").unwrap();
        let dp = solver.execute(&inst.graph, inst.start, inst.end, "dp").unwrap();
        prop_assert_eq!(pruned, dp);
        prop_assert_eq!(exhaustive, dp);
    }
}

#[test]
fn endpoints_in_different_blocks_are_never_connected() {
    let solver = Solver::new();
    let mut checked = 0;
    for seed in 0..64u64 {
        let inst = generate(6, &mut StdRng::seed_from_u64(seed)).unwrap();
        let reachable = hamstar::component::connected_component(&inst.graph, inst.start)
            .contains(&inst.end);
        if !reachable {
            checked += 1;
            for name in ["exhaustive", "component-pruned", "dp"] {
                assert_eq!(
                    solver.execute(&inst.graph, inst.start, inst.end, name),
                    Ok(false)
                );
            }
        }
    }
    // with three blocks, two thirds of endpoint pairs straddle blocks
    assert!(checked > 0);
}

#[test]
fn timed_outcome_matches_untimed() {
    let inst = generate(7, &mut StdRng::seed_from_u64(5)).unwrap();
    let solver = Solver::new();
    let plain = solver.execute(&inst.graph, inst.start, inst.end, "dp").unwrap();
    let timed = solver
        .execute_timed(&inst.graph, inst.start, inst.end, "dp")
        .unwrap();
    assert_eq!(timed.found, plain);
}
