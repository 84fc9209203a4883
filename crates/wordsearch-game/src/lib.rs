//! Word-search game session management.
//!
//! This crate turns a generated puzzle into a playable session: it records the
//! cells the player traces, resolves each finished gesture against the word
//! list, and reports when the last word is found.
//!
//! # Overview
//!
//! - [`Game`]: one puzzle session and its gesture lifecycle
//! - [`resolve_selection`]: the pure matcher behind [`Game::finish_selection`]
//! - [`Selection`] and [`FoundWords`]: the traced cells and the found words
//! - [`Completion`], [`BestTime`], and [`format_elapsed`]: timing
//!
//! Matching compares letters only. A selection that spells a word forwards or
//! backwards counts, wherever its cells are.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use wordsearch_core::{LetterGrid, Position, Word};
//! use wordsearch_game::{Game, MatchResult};
//! use wordsearch_generator::{GeneratedPuzzle, PuzzleSeed};
//!
//! let puzzle = GeneratedPuzzle {
//!     grid: "SUN\nXYZ\nABC".parse::<LetterGrid>()?,
//!     words: vec![Word::new("SUN")?],
//!     placements: vec![],
//!     seed: PuzzleSeed::from_bytes([0; 32]),
//! };
//! let mut game = Game::new(puzzle);
//!
//! game.begin_selection(Position::new(0, 2))?;
//! game.extend_selection(Position::new(0, 1))?;
//! game.extend_selection(Position::new(0, 0))?;
//! let outcome = game.finish_selection(Duration::from_secs(12));
//!
//! assert!(matches!(outcome.result, MatchResult::Matched(_)));
//! assert!(outcome.completion.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, found_words::*, game::*, matcher::*, selection::*, timing::*};

mod error;
mod found_words;
mod game;
mod matcher;
mod selection;
mod timing;
