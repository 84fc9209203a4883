//! Core data structures for word-search puzzles.
//!
//! This crate provides the fundamental types shared by puzzle generation and
//! game management.
//!
//! # Overview
//!
//! 1. **Symbols** - What goes into a cell or a word
//!    - [`letter`]: Type-safe uppercase letters `A`-`Z`
//!    - [`word`]: Normalized (uppercase, non-empty) target words
//!
//! 2. **Geometry** - Where letters go
//!    - [`position`]: Cell coordinates (row, column)
//!    - [`direction`]: The three supported word orientations
//!    - [`placement`]: A word anchored at a position along a direction
//!
//! 3. **Grids** - The puzzle board
//!    - [`grid`]: [`GridSize`], the mutable [`GridBuilder`] used while
//!      generating, and the immutable [`LetterGrid`] handed to players
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{Direction, GridBuilder, GridSize, Letter, Placement, Position, Word};
//!
//! let size = GridSize::new(5)?;
//! let mut builder = GridBuilder::new(size);
//!
//! let cat: Word = "cat".parse()?;
//! let placement = Placement::new(cat, Position::new(2, 0), Direction::Horizontal);
//! builder.place(&placement).expect("empty grid accepts the word");
//!
//! let grid = builder.fill_empty(|_| Letter::from_index(25));
//! assert_eq!(grid.row(2).iter().map(|l| l.as_char()).collect::<String>(), "CATZZ");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod direction;
pub mod grid;
pub mod letter;
pub mod placement;
pub mod position;
pub mod word;

// Re-export commonly used types
pub use self::{
    direction::Direction,
    grid::{GridBuilder, GridParseError, GridSize, GridSizeError, LetterGrid},
    letter::{Letter, LetterError},
    placement::{Placement, PlacementRejection},
    position::Position,
    word::{Word, WordError},
};
