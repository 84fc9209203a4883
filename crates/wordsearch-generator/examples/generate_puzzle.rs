//! Example demonstrating word-search puzzle generation.
//!
//! This example shows how to:
//! - Configure a `PuzzleGenerator`
//! - Generate a puzzle from the built-in pool or a custom word list
//! - Display the grid, the placements, and the seed
//! - Sample many puzzles and keep the one that placed the most words
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Replay a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Use a custom word list on a small grid, sampling up to 1000 puzzles to
//! avoid shortfalls:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 8 --word harvest --word jaggery --word kolam --max-tries 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use wordsearch_core::{GridSize, Word};
use wordsearch_generator::{GeneratedPuzzle, PuzzleConfig, PuzzleGenerator, PuzzleSeed, WordPool};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length.
    #[arg(long, value_name = "N", default_value_t = 15)]
    size: usize,

    /// Number of words drawn from the built-in pool.
    #[arg(long, value_name = "COUNT", default_value_t = 10)]
    count: usize,

    /// Word to hide instead of drawing from the pool. Repeatable.
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// Seed to replay (64 hex characters).
    #[arg(long, value_name = "SEED", conflicts_with = "max_tries")]
    seed: Option<PuzzleSeed>,

    /// Maximum puzzles to sample when looking for one without shortfalls.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();

    let size = GridSize::new(args.size).unwrap_or_else(|e| {
        eprintln!("--size: {e}");
        process::exit(2);
    });
    let config = PuzzleConfig::default().size(size).word_count(args.count);
    let generator = PuzzleGenerator::new(config);

    let words = match args
        .words
        .iter()
        .map(|w| Word::new(w))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(words) => words,
        Err(e) => {
            eprintln!("--word: {e}");
            process::exit(2);
        }
    };
    let pool = WordPool::festival();

    let generate = |seed: PuzzleSeed| {
        if words.is_empty() {
            generator.generate_from_pool_with_seed(&pool, seed)
        } else {
            generator.generate_with_seed(&words, seed)
        }
    };

    if let Some(seed) = args.seed {
        print_puzzle(&generate(seed), None);
        return;
    }

    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.max_tries)
        .into_par_iter()
        .map(|_| generate(PuzzleSeed::random()))
        .min_by_key(|puzzle| puzzle.shortfalls().count());

    if let Some(puzzle) = best {
        print_puzzle(&puzzle, Some(args.max_tries));
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle, max_tries: Option<usize>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if let Some(max_tries) = max_tries {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!("  Shortfalls: {}", puzzle.shortfalls().count());
        println!();
    }

    println!("Grid:");
    for row in puzzle.grid.rows() {
        let line = row
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {line}");
    }
    println!();

    println!("Placements:");
    for outcome in &puzzle.placements {
        match outcome.placement() {
            Some(placement) => println!(
                "  {placement} ({} attempt(s))",
                outcome.attempts()
            ),
            None => println!("  {} not placed", outcome.word()),
        }
    }
}
