use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minefield_core::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn presets() -> [(&'static str, BoardConfig); 4] {
    [
        ("beginner", BoardConfig::beginner()),
        ("intermediate", BoardConfig::intermediate()),
        ("expert", BoardConfig::expert()),
        // nearly full, where rejection sampling suffers
        ("crowded", BoardConfig::new_unchecked(16, 30, 470)),
    ]
}

fn gen_placements(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for (name, config) in presets() {
        group.bench_with_input(BenchmarkId::new("shuffled", name), &config, |b, &config| {
            let mut rng = SmallRng::seed_from_u64(0);
            b.iter(|| Board::generate_with(black_box(config), ShuffledPlacement, &mut rng))
        });
        group.bench_with_input(BenchmarkId::new("rejection", name), &config, |b, &config| {
            let mut rng = SmallRng::seed_from_u64(0);
            b.iter(|| Board::generate_with(black_box(config), RejectionPlacement, &mut rng))
        });
    }

    group.finish();
}

fn gen_snapshot(c: &mut Criterion) {
    let board = Board::new(99, 16, 30, 0).unwrap();
    c.bench_function("snapshot/expert", |b| b.iter(|| black_box(&board).snapshot(0, 0)));
}

criterion_group!(benches, gen_placements, gen_snapshot);
criterion_main!(benches);
