use criterion::{criterion_group, criterion_main, Criterion};
use emst::{DualTreeBoruvka, EmstParams};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SEED: u64 = 0;
const N: usize = 2000;
const D: usize = 3;

fn benchmark(criterion: &mut Criterion) {
    let data = dataset();
    let mut group = criterion.benchmark_group("emst");
    group.sample_size(10);

    group.bench_function("DualTree", |b| b.iter(|| bench_mst(&data, EmstParams::default())));
    group.bench_function("DualTreeLeaf16", |b| {
        b.iter(|| bench_mst(&data, EmstParams::builder().leaf_size(16).build()))
    });
    group.bench_function("Naive", |b| {
        b.iter(|| bench_mst(&data, EmstParams::builder().naive(true).build()))
    });
    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

fn bench_mst(data: &[Vec<f64>], params: EmstParams) -> f64 {
    let mut dtb = DualTreeBoruvka::new(data, params).expect("Invalid dataset");
    emst::total_weight(&dtb.compute_mst())
}

fn dataset() -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..N).map(|_| (0..D).map(|_| rng.gen()).collect()).collect()
}
