use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tidemark_core::domain::NumericField;
use tidemark_core::{compute_categories, compute_domain, BandScale, LinearScale, SeaLevel};

fn gen_sea_levels(n: usize) -> Vec<SeaLevel> {
    const SEAS: [&str; 5] = ["Baltic Sea", "Indian Ocean", "North Atlantic", "Mediterranean", "Yellow Sea"];
    (0..n)
        .map(|i| SeaLevel {
            sea_name: SEAS[i % SEAS.len()].to_string(),
            // slow drift with a seasonal wobble
            adjusted_sea_level: (i as f64 * 0.01).sin() * 2.0 + i as f64 * 0.0001,
            upper_error_bound: 0.5 + (i % 7) as f64 * 0.1,
            year: 1880.0 + (i / SEAS.len()) as f64,
        })
        .collect()
}

fn bench_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain");
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_sea_levels(n);
        group.bench_with_input(BenchmarkId::new("extent", n), &data, |b, d| {
            b.iter(|| black_box(compute_domain(d, SeaLevel::ADJUSTED_SEA_LEVEL)))
        });
        group.bench_with_input(BenchmarkId::new("categories", n), &data, |b, d| {
            b.iter(|| black_box(compute_categories(d, SeaLevel::SEA_NAME)))
        });
    }
    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let data = gen_sea_levels(100_000);
    let year: NumericField<SeaLevel> = SeaLevel::YEAR;
    let x = match compute_domain(&data, year) {
        Ok(extent) => LinearScale::new(extent, (200.0, 1100.0)),
        Err(e) => panic!("bench data has no years: {e}"),
    };
    let band = match compute_categories(&data, SeaLevel::SEA_NAME).and_then(|c| BandScale::new(c, (0.0, 900.0), 0.1)) {
        Ok(b) => b,
        Err(e) => panic!("bench data has no seas: {e}"),
    };

    c.bench_function("linear_to_px_100k", |b| {
        b.iter(|| data.iter().map(|r| x.to_px(black_box(r.year))).sum::<f64>())
    });
    c.bench_function("linear_nice_ticks", |b| b.iter(|| black_box(x.nice(10).ticks(10))));
    c.bench_function("band_center_100k", |b| {
        b.iter(|| data.iter().filter_map(|r| band.center(black_box(&r.sea_name))).sum::<f64>())
    });
}

criterion_group!(benches, bench_domain, bench_map);
criterion_main!(benches);
