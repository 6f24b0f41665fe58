//! Criterion benchmarks for pricer_pricing Monte Carlo valuation.
//!
//! Benchmarks cover:
//! - Black-Scholes path simulation (1K, 10K, 100K paths)
//! - European call valuation on pre-simulated paths
//! - Enum dispatch across the three payoffs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::models::{BlackScholesParams, MonteCarloBlackScholesModel, MonteCarloConfig};
use pricer_pricing::products::{AssetMonteCarloProduct, AssetProduct, EuropeanCall, ProductKind};

fn model(n_paths: usize, n_steps: usize) -> MonteCarloBlackScholesModel {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .horizon(1.0)
        .seed(42)
        .build()
        .unwrap();
    MonteCarloBlackScholesModel::new(BlackScholesParams::default(), config).unwrap()
}

/// Benchmark path simulation at model construction.
fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    group.sample_size(20);

    for n_paths in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("black_scholes_12_steps", n_paths),
            &n_paths,
            |b, &n| b.iter(|| black_box(model(n, 12))),
        );
    }

    group.finish();
}

/// Benchmark valuation of a call on pre-simulated paths.
fn bench_valuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("valuation");

    for n_paths in [1_000, 10_000, 100_000] {
        let model = model(n_paths, 1);
        let call = EuropeanCall::new(1.0, 100.0);
        group.bench_with_input(
            BenchmarkId::new("european_call", n_paths),
            &model,
            |b, model| b.iter(|| call.price(black_box(model)).unwrap()),
        );
    }

    group.finish();
}

/// Benchmark enum dispatch over every payoff.
fn bench_product_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_dispatch");
    let model = model(50_000, 1);

    for kind in [ProductKind::Call, ProductKind::Put, ProductKind::Digital] {
        let product = AssetProduct::new(kind, 1.0, 100.0);
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| product.value(black_box(0.0), &model).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_simulation,
    bench_valuation,
    bench_product_dispatch
);
criterion_main!(benches);
