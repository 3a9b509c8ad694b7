use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use triangle::generate::random_rows;
use triangle::{Reducer, Triangle, accumulate, search, subtriangles};

fn run_all_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2024);

    let mut group_small = c.benchmark_group("triangle_20_rows");
    let rows = random_rows(20, &mut rng);
    let t = Triangle::new(rows.clone()).unwrap();
    group_small.bench_function("search", |b| b.iter(|| search::solve(&rows)));
    group_small.bench_function("subtriangles", |b| b.iter(|| subtriangles::solve(&t)));
    group_small.bench_function("reduction", |b| {
        b.iter(|| Reducer::default().solve(&mut t.clone()))
    });
    group_small.bench_function("accumulate", |b| b.iter(|| accumulate::solve(&rows)));
    group_small.finish();

    let mut group_blocks = c.benchmark_group("reduction_100_rows");
    group_blocks.sample_size(10);
    let t = Triangle::new(random_rows(100, &mut rng)).unwrap();
    for block_size in [2, 4, 6, 8] {
        let reducer = Reducer::new(block_size).unwrap();
        group_blocks.bench_with_input(BenchmarkId::from_parameter(block_size), &t, |b, t| {
            b.iter(|| reducer.solve(&mut t.clone()))
        });
    }
    group_blocks.finish();
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
