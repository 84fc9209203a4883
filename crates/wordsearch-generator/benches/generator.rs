//! Benchmarks for word-search grid generation.
//!
//! This benchmark suite measures the performance of puzzle generation using
//! `PuzzleGenerator` with the built-in festival vocabulary.
//!
//! # Benchmarks
//!
//! - **`generator_default`**: Generates a 15×15 grid for ten pool words.
//!   Measures word selection, placement search, and filler.
//! - **`generator_crowded`**: Generates a 10×10 grid for all twenty pool words,
//!   so many attempts collide and some words run out of attempts.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use wordsearch_core::GridSize;
use wordsearch_generator::{PuzzleConfig, PuzzleGenerator, PuzzleSeed, WordPool};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator_default(c: &mut Criterion) {
    let generator = PuzzleGenerator::default();
    let pool = WordPool::festival();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_default", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_from_pool_with_seed(&pool, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_crowded(c: &mut Criterion) {
    let pool = WordPool::festival();
    let config = PuzzleConfig::default()
        .size(GridSize::new(10).unwrap())
        .word_count(pool.len());
    let generator = PuzzleGenerator::new(config);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_crowded", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_from_pool_with_seed(&pool, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_default,
        bench_generator_crowded
);
criterion_main!(benches);
