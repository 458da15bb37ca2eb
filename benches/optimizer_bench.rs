//! Criterion benchmarks for the knapsack GA optimizer.
//!
//! Uses reproducible sample catalogs to measure the generational loop
//! across catalog sizes and both crossover variants.

use agro_optim::{CrossoverType, ItemCatalog, Optimizer, OptimizerConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    group.sample_size(10);

    for (items, pop, gens) in [(10usize, 16usize, 100usize), (20, 20, 200), (30, 32, 500)] {
        let catalog = ItemCatalog::sample(items, 42);
        let config = OptimizerConfig::default()
            .with_budget(150.0)
            .with_population_size(pop)
            .with_num_generations(gens)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", items, pop, gens), items),
            &(catalog, config),
            |b, (catalog, config)| {
                b.iter(|| {
                    let mut optimizer =
                        Optimizer::new(catalog.clone(), config.clone()).expect("valid config");
                    black_box(optimizer.optimize())
                })
            },
        );
    }
    group.finish();
}

fn bench_crossover_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossover_variants");
    group.sample_size(10);

    for kind in [CrossoverType::SinglePoint, CrossoverType::RandomPoint] {
        let catalog = ItemCatalog::sample(20, 42);
        let config = OptimizerConfig::default()
            .with_budget(150.0)
            .with_population_size(20)
            .with_num_generations(200)
            .with_crossover_type(kind)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{kind:?}")),
            &(catalog, config),
            |b, (catalog, config)| {
                b.iter(|| {
                    let mut optimizer =
                        Optimizer::new(catalog.clone(), config.clone()).expect("valid config");
                    black_box(optimizer.optimize())
                })
            },
        );
    }
    group.finish();
}

fn bench_budget_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("budget_sweep");
    group.sample_size(10);

    let catalog = ItemCatalog::sample(15, 42);
    let config = OptimizerConfig::default()
        .with_budget(150.0)
        .with_population_size(16)
        .with_num_generations(100)
        .with_seed(42);
    group.bench_function("default_10_budgets", |b| {
        b.iter(|| {
            let mut optimizer =
                Optimizer::new(catalog.clone(), config.clone()).expect("valid config");
            black_box(optimizer.analyze_budget_sensitivity(None))
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_optimize,
    bench_crossover_variants,
    bench_budget_sweep
);
criterion_main!(benches);
