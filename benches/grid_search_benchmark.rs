use cost_rebalance::{
    CancellationToken, CostModel, GridSearchConfig, GridSearchDriver, Rebalancer, SamplingMethod,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_utils::{synthetic_dataset, IdentityStrategy};

const BENCH_CONFIG: GridSearchConfig = GridSearchConfig {
    cost_steps: 10,
    cost_step: 1.0,
    norm_steps: 2,
    norm_step: 0.5,
    max_weighted_cost_steps: 2,
    max_weighted_cost_step: 50.0,
    methods: &SamplingMethod::ALL,
};

fn benchmark_cost_vectors(c: &mut Criterion) {
    let dataset = synthetic_dataset(4_000, 1_000, 8, 42);
    let cost_model = CostModel::new(5.0, 2.0).unwrap();

    c.bench_function("cost_vectors", |b| {
        b.iter(|| {
            Rebalancer::<IdentityStrategy>::cost_vectors(black_box(&dataset), &cost_model)
        })
    });
}

fn benchmark_grid_search(c: &mut Criterion) {
    let dataset = synthetic_dataset(400, 100, 8, 42);
    let driver = GridSearchDriver::new(&dataset, &IdentityStrategy, BENCH_CONFIG);

    c.bench_function("grid_search_sweep", |b| {
        b.iter(|| driver.sweep(&CancellationToken::new()).count())
    });

    c.bench_function("grid_search_sweep_parallel", |b| {
        b.iter(|| driver.sweep_parallel(&CancellationToken::new()))
    });
}

criterion_group!(benches, benchmark_cost_vectors, benchmark_grid_search);
criterion_main!(benches);
