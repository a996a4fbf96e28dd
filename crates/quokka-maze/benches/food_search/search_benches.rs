//! Food search benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use quokka_maze::config::{ClaimPolicy, SearchConfig};

use super::config;
use super::generators::generate_grid;

const BREADTH_FIRST: [ClaimPolicy; 2] = [ClaimPolicy::FirstClaim, ClaimPolicy::ResourceState];

/// Benchmark `find_path` corner to corner.
pub fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path");

    for &side in config::GRID_SIDES {
        for policy in BREADTH_FIRST {
            let grid = generate_grid(side, config::FOOD_EVERY, SearchConfig::with_policy(policy));
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", policy), side),
                &side,
                |b, _| {
                    b.iter(|| {
                        grid.maze.find_path(
                            black_box(grid.corner),
                            black_box(grid.opposite),
                            black_box(config::MAX_GAP),
                        )
                    })
                },
            );
        }
    }

    let exhaustive = generate_grid(
        config::EXHAUSTIVE_SIDE,
        config::FOOD_EVERY,
        SearchConfig::with_policy(ClaimPolicy::Exhaustive).max_states(config::EXHAUSTIVE_MAX_STATES),
    );
    group.bench_function(BenchmarkId::new("Exhaustive", config::EXHAUSTIVE_SIDE), |b| {
        b.iter(|| {
            exhaustive.maze.find_path(
                black_box(exhaustive.corner),
                black_box(exhaustive.opposite),
                black_box(config::MAX_GAP),
            )
        })
    });

    group.finish();
}

/// Benchmark `plan_with_extra_food` with growing food budgets.
pub fn bench_extra_food(c: &mut Criterion) {
    let mut group = c.benchmark_group("extra_food");

    for &side in config::GRID_SIDES {
        let grid = generate_grid(
            side,
            config::FOOD_EVERY,
            SearchConfig::with_policy(ClaimPolicy::ResourceState),
        );
        for &x in config::EXTRA_FOOD {
            group.bench_with_input(
                BenchmarkId::new(format!("side_{}", side), x),
                &x,
                |b, &x| {
                    b.iter(|| {
                        grid.maze.plan_with_extra_food(
                            black_box(grid.corner),
                            black_box(grid.opposite),
                            black_box(1),
                            black_box(x),
                        )
                    })
                },
            );
        }
    }

    group.finish();
}
