use wordsearch_core::Word;
use wordsearch_generator::{GeneratedPuzzle, PuzzleConfig, PuzzleGenerator, PuzzleSeed, WordPool};

use crate::cli::PuzzleArgs;

/// Creates puzzles from a fixed configuration.
///
/// Custom words are hidden in the order given, each once; without them, words
/// are drawn from the built-in pool.
#[derive(Debug, Clone)]
pub struct GameFactory {
    generator: PuzzleGenerator,
    words: Vec<Word>,
    pool: WordPool,
}

impl GameFactory {
    #[must_use]
    pub fn new(config: PuzzleConfig, words: Vec<Word>) -> Self {
        Self {
            generator: PuzzleGenerator::new(config),
            words: WordPool::new(words).words().to_vec(),
            pool: WordPool::festival(),
        }
    }

    #[must_use]
    pub fn from_args(args: &PuzzleArgs) -> Self {
        Self::new(args.config(), args.words.clone())
    }

    /// Generates a puzzle from `seed`, or from a random seed.
    #[must_use]
    pub fn generate(&self, seed: Option<PuzzleSeed>) -> GeneratedPuzzle {
        let seed = seed.unwrap_or_else(PuzzleSeed::random);
        let puzzle = if self.words.is_empty() {
            self.generator.generate_from_pool_with_seed(&self.pool, seed)
        } else {
            self.generator.generate_with_seed(&self.words, seed)
        };
        for word in puzzle.shortfalls() {
            log::warn!("{word} did not fit in the grid");
        }
        puzzle
    }
}
