use criterion::{black_box, criterion_group, criterion_main, Criterion};

use parking_search::algorithms::{all_strategies, trace_route};
use parking_search::scenario::random_scenario;

fn bench_strategies(c: &mut Criterion) {
    let scenario = random_scenario("bench-lot", 64, 64, 0.45, 99).unwrap();
    let origin = scenario.origin();
    let grid = scenario.grid().with_occupied(origin).unwrap();

    for strategy in all_strategies() {
        c.bench_function(&format!("search_{}", strategy.name()), |b| {
            b.iter(|| {
                strategy
                    .search(black_box(&grid), black_box(origin))
                    .unwrap()
            })
        });
    }
}

fn bench_route(c: &mut Criterion) {
    // Dense lot so the tracer rolls deep into the grid before parking.
    let scenario = random_scenario("bench-route", 64, 64, 0.97, 7).unwrap();
    let origin = scenario.origin();
    let grid = scenario.grid().with_occupied(origin).unwrap();

    c.bench_function("trace_route", |b| {
        b.iter(|| trace_route(black_box(&grid), black_box(origin)).unwrap())
    });
}

criterion_group!(benches, bench_strategies, bench_route);
criterion_main!(benches);
