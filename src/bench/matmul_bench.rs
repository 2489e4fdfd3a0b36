use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use matmul_threads::{Matrix, distribute, multiply_parallel, multiply_sequential};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_multiply(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("multiply");
    group.sample_size(10);

    for size in [64, 128, 256] {
        let a = Matrix::random(size, size, 100, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("sequential", size), &a, |bench, a| {
            bench.iter(|| multiply_sequential(black_box(a), black_box(a)).unwrap())
        });

        for threads in [1, 2, 4, 8] {
            group.bench_with_input(
                BenchmarkId::new(format!("parallel_{}t", threads), size),
                &a,
                |bench, a| {
                    bench.iter(|| multiply_parallel(black_box(a), black_box(a), threads).unwrap())
                },
            );
        }
    }

    group.finish();
}

fn bench_distribute(c: &mut Criterion) {
    c.bench_function("distribute 25M cells / 64 slots", |bench| {
        bench.iter(|| distribute(black_box(5000 * 5000), black_box(64)).unwrap())
    });
}

criterion_group!(benches, bench_multiply, bench_distribute);
criterion_main!(benches);
