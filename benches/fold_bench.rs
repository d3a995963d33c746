//! Criterion benchmarks for the HP folding engine.
//!
//! Measures the hot path (energy evaluation and move proposal) on a
//! fixed conformation, plus a short seeded end-to-end run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hpfold::anneal::{propose, random_walk, AnnealConfig, AnnealRunner};
use hpfold::energy::energy;
use hpfold::lattice::Coord;
use hpfold::model::HpSequence;

// Benchmark sequence from the 2D HP literature (20-mer, optimum -9).
const SEQ_20: &str = "HPHPPHHPHPPHPHHPPHPH";

fn fixed_conformation(len: usize) -> Vec<Coord> {
    // Deterministic walk so every run scores the same conformation.
    let mut rng = StdRng::seed_from_u64(7);
    loop {
        if let Some(path) = random_walk(len, &mut rng) {
            return path;
        }
    }
}

// ===========================================================================
// Energy evaluation
// ===========================================================================

fn bench_energy(c: &mut Criterion) {
    let sequence: HpSequence = SEQ_20.parse().unwrap();
    let path = fixed_conformation(sequence.len());

    c.bench_function("energy/20-mer", |b| {
        b.iter(|| energy(black_box(&sequence), black_box(&path)))
    });
}

// ===========================================================================
// Move proposal
// ===========================================================================

fn bench_propose(c: &mut Criterion) {
    let path = fixed_conformation(20);

    c.bench_function("propose/20-mer", |b| {
        let mut rng = StdRng::seed_from_u64(11);
        b.iter(|| propose(black_box(&path), &mut rng))
    });
}

// ===========================================================================
// End-to-end annealing
// ===========================================================================

fn bench_anneal(c: &mut Criterion) {
    let sequence: HpSequence = SEQ_20.parse().unwrap();

    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);
    for trials in [20usize, 100] {
        let config = AnnealConfig::default()
            .with_initial_temperature(1.0)
            .with_final_temperature(0.05)
            .with_cooling_factor(0.9)
            .with_trials_per_temperature(trials)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(trials),
            &config,
            |b, config| b.iter(|| AnnealRunner::run(&sequence, config).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_energy, bench_propose, bench_anneal);
criterion_main!(benches);
