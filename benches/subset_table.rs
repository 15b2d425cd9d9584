use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hamstar::strategies::SubsetTable;
use hamstar::AdjacencyMatrix;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, m: usize, p: f64) -> AdjacencyMatrix {
    let mut g = AdjacencyMatrix::new(m);
    for u in 0..m {
        for v in (u + 1)..m {
            if rng.gen_bool(p) {
                g.add_edge(u, v);
            }
        }
    }
    g
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("subset_table_build");
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    for &m in &[10usize, 14, 18] {
        let sparse = random_graph(&mut rng, m, 0.25);
        let dense = random_graph(&mut rng, m, 0.75);
        group.bench_function(format!("sparse_m_{m}"), |b| {
            b.iter(|| black_box(SubsetTable::build(&sparse, 0).reaches_all(m - 1)))
        });
        group.bench_function(format!("dense_m_{m}"), |b| {
            b.iter(|| black_box(SubsetTable::build(&dense, 0).reaches_all(m - 1)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_table_build);
criterion_main!(benches);
