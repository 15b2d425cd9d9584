use hamstar::component::connected_component;
use hamstar::{generate, GraphGenerator, SolveError};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use rand_xorshift::XorShiftRng;

proptest! {
    #[test]
    fn shape_symmetry_and_endpoints(n in 1usize..10, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let inst = generate(n, &mut rng).unwrap();
        let total = 3 * n;
        prop_assert_eq!(inst.graph.len(), total);
        prop_assert!(inst.graph.is_symmetric());
        for row in inst.graph.to_rows() {
            prop_assert_eq!(row.len(), total);
            prop_assert!(row.iter().all(|&v| v == 0 || v == 1));
        }
        prop_assert_ne!(inst.start, inst.end);
        prop_assert!(inst.start < total);
        prop_assert!(inst.end < total);
    }

    #[test]
    fn every_vertex_sits_in_a_block_of_n(n in 1usize..9, seed in any::<u64>()) {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let inst = generate(n, &mut rng).unwrap();
        for v in 0..3 * n {
            prop_assert_eq!(connected_component(&inst.graph, v).len(), n);
        }
        // spanning paths give at least n-1 edges per block, cliques at most C(n,2)
        let edges = inst.graph.edge_count();
        prop_assert!(edges >= 3 * (n - 1));
        prop_assert!(edges <= 3 * n * (n - 1) / 2);
    }

    #[test]
    fn same_seed_same_instance(n in 1usize..8, seed in any::<u64>()) {
        let a = generate(n, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = generate(n, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn different_seeds_usually_differ() {
    let instances: Vec<_> = (0..8u64)
        .map(|seed| generate(6, &mut StdRng::seed_from_u64(seed)).unwrap())
        .collect();
    let distinct = instances
        .iter()
        .enumerate()
        .filter(|(i, a)| instances[..*i].iter().all(|b| b != *a))
        .count();
    assert!(distinct > 1);
}

#[test]
fn zero_block_size_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        GraphGenerator::new().generate(0, &mut rng),
        Err(SolveError::EmptyBlock)
    );
}

#[test]
fn endpoints_cover_all_pairs_eventually() {
    // n = 1: three isolated vertices, six ordered endpoint pairs
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = [[false; 3]; 3];
    for _ in 0..500 {
        let inst = generate(1, &mut rng).unwrap();
        assert_eq!(inst.graph.edge_count(), 0);
        seen[inst.start][inst.end] = true;
    }
    for s in 0..3 {
        for t in 0..3 {
            assert_eq!(seen[s][t], s != t, "pair ({s}, {t})");
        }
    }
}
