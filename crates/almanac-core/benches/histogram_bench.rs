use almanac_core::{histogram, HistogramConfig};
use criterion::{criterion_group, criterion_main, black_box, BatchSize, BenchmarkId, Criterion};

fn gen_values(n: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // waveform with drift, roughly spanning 10..90
        v.push((i as f64 * 0.013).sin() * 40.0 + 50.0 + i as f64 * 0.0001);
    }
    v
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    for &n in &[50_000usize, 100_000usize] {
        let data = gen_values(n);
        for &buckets in &[12usize, 64usize, 256usize] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_b{buckets}")),
                &buckets,
                |b, &k| {
                    b.iter_batched(
                        || data.clone(),
                        |d| {
                            let cfg = HistogramConfig { bucket_count: k, domain: None };
                            let _ = black_box(histogram(&d, |v: &f64| *v, cfg));
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_histogram);
criterion_main!(benches);
