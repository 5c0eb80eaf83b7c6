//! Benchmarks for the CPU-side simulator tick.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use glyphfloat::{MotionConfig, SymbolSimulator, Viewport};

const VIEW: Viewport = Viewport::new(1280.0, 720.0);

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("s{i}")).collect()
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for n in [7usize, 14, 20] {
        group.bench_with_input(BenchmarkId::new("jitter", n), &n, |b, &n| {
            let motion = MotionConfig::default();
            let mut sim = SymbolSimulator::new(labels(n), VIEW, motion, Some(1));
            b.iter(|| sim.step(black_box(VIEW)))
        });

        group.bench_with_input(BenchmarkId::new("straight", n), &n, |b, &n| {
            let motion = MotionConfig::default().with_jitter(0.0);
            let mut sim = SymbolSimulator::new(labels(n), VIEW, motion, Some(1));
            b.iter(|| sim.step(black_box(VIEW)))
        });
    }

    group.finish();
}

fn bench_crowded(c: &mut Criterion) {
    // Large symbols in a small box keep most pairs in contact.
    let view = Viewport::new(200.0, 200.0);
    let motion = MotionConfig::default().with_symbol_size(60.0);
    let mut sim = SymbolSimulator::new(labels(20), view, motion, Some(2));
    c.bench_function("step_crowded_20", |b| b.iter(|| sim.step(black_box(view))));
}

fn bench_snapshot(c: &mut Criterion) {
    let sim = SymbolSimulator::new(labels(20), VIEW, MotionConfig::default(), Some(3));
    c.bench_function("snapshot_20", |b| b.iter(|| black_box(sim.snapshot())));
}

criterion_group!(benches, bench_step, bench_crowded, bench_snapshot);
criterion_main!(benches);
