//! Criterion benchmarks for the window optimizer.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/report/index.html`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use normwin_core::{
    maximize_closed_form, maximize_golden_section, Algorithm, SensitivityTable, WindowOptimizer,
};

/// Benchmark comparing the iterative search against the closed form.
fn strategy_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy_comparison");

    for perimeter in [1.0f64, 12.0, 100.0, 1000.0] {
        group.bench_with_input(
            BenchmarkId::new("golden_section", perimeter),
            &perimeter,
            |b, &p| b.iter(|| maximize_golden_section(black_box(p)).unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("closed_form", perimeter),
            &perimeter,
            |b, &p| b.iter(|| maximize_closed_form(black_box(p)).unwrap()),
        );
    }

    group.finish();
}

/// Benchmark the one-time sensitivity table build (100 bulk searches).
fn sensitivity_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("sensitivity_table");
    group.sample_size(20);

    group.bench_function("build_golden_section", |b| {
        b.iter(|| SensitivityTable::build(black_box(Algorithm::GoldenSection)))
    });

    group.bench_function("build_closed_form", |b| {
        b.iter(|| SensitivityTable::build(black_box(Algorithm::ClosedForm)))
    });

    group.finish();
}

/// Benchmark the memoized request path: hit vs miss.
fn cached_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_request");

    group.bench_function("cache_hit", |b| {
        let mut optimizer = WindowOptimizer::new();
        optimizer.optimize(12.0).unwrap();
        b.iter(|| optimizer.optimize(black_box(12.0)).unwrap())
    });

    group.bench_function("cache_miss", |b| {
        let mut optimizer = WindowOptimizer::new();
        let mut toggle = false;
        b.iter(|| {
            // Alternate between two perimeters so the single slot never hits.
            toggle = !toggle;
            let perimeter = if toggle { 12.0 } else { 50.0 };
            optimizer.optimize(black_box(perimeter)).unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    strategy_comparison,
    sensitivity_table_build,
    cached_request
);
criterion_main!(benches);
