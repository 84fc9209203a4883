//! Word-search puzzle generation.
//!
//! [`PuzzleGenerator`] embeds words into a square grid along one of three
//! directions (see [`Direction`](wordsearch_core::Direction)) and fills the
//! remaining cells with random letters.
//!
//! # Randomness
//!
//! Every random choice comes from a [`PlacementSource`]. The default,
//! [`SeededSource`], derives its streams from a [`PuzzleSeed`], so a puzzle is
//! reproducible from its seed. Tests can supply their own source to force
//! particular directions and anchors.
//!
//! # Best effort
//!
//! Placement is attempted a bounded number of times per word. A word that
//! never fits is reported as [`WordPlacement::Shortfall`] and does not appear
//! in the grid; callers must not assume every requested word was placed.
//!
//! # Examples
//!
//! ```
//! use wordsearch_generator::{PuzzleGenerator, WordPool};
//!
//! let generator = PuzzleGenerator::default();
//! let puzzle = generator.generate_from_pool(&WordPool::festival());
//!
//! println!("Seed: {}", puzzle.seed);
//! println!("{}", puzzle.grid);
//! for word in puzzle.shortfalls() {
//!     println!("not placed: {word}");
//! }
//! ```

pub use self::{generator::*, pool::WordPool, seed::*, source::*};

mod generator;
mod pool;
mod seed;
mod source;
