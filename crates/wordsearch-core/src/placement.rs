//! Word placements on a grid.

use std::fmt::{self, Display};

use crate::{Direction, GridSize, Letter, Position, Word};

/// A word anchored at a start position and laid out along a direction.
///
/// A placement by itself says nothing about whether the word fits; use
/// [`Placement::fits_within`] for the boundary check and
/// [`GridBuilder::check`] for collisions with letters already committed.
///
/// [`GridBuilder::check`]: crate::GridBuilder::check
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, GridSize, Placement, Position, Word};
///
/// let word = Word::new("SUN")?;
/// let placement = Placement::new(word, Position::new(1, 1), Direction::Diagonal);
///
/// let cells: Vec<_> = placement.positions().collect();
/// assert_eq!(cells, [Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)]);
/// assert_eq!(placement.end(), Position::new(3, 3));
///
/// assert!(placement.fits_within(GridSize::new(4)?));
/// assert!(!placement.fits_within(GridSize::new(3)?));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    word: Word,
    start: Position,
    direction: Direction,
}

/// The reason a placement cannot be committed to a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlacementRejection {
    /// Part of the word would lie outside the grid.
    #[display("word extends past the grid boundary")]
    OutOfBounds,
    /// A cell already holds a different letter.
    #[display("cell {position} holds {existing}, word needs {required}")]
    Collision {
        /// The conflicting cell.
        position: Position,
        /// The letter already committed to the cell.
        existing: Letter,
        /// The letter the word needs in the cell.
        required: Letter,
    },
}

impl Placement {
    /// Creates a placement.
    #[must_use]
    pub fn new(word: Word, start: Position, direction: Direction) -> Self {
        Self {
            word,
            start,
            direction,
        }
    }

    /// Returns the placed word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the position of the first letter.
    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the direction the word reads in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the position of the last letter.
    ///
    /// # Panics
    ///
    /// Panics if the end coordinate overflows `usize`.
    #[must_use]
    pub fn end(&self) -> Position {
        self.start
            .step(self.direction, self.word.len() - 1)
            .expect("placement end overflows usize")
    }

    /// Returns `true` if every letter lies inside a grid of the given size.
    #[must_use]
    pub fn fits_within(&self, size: GridSize) -> bool {
        let size = size.get();
        self.start.row() < size
            && self.start.col() < size
            && self
                .start
                .step(self.direction, self.word.len() - 1)
                .is_some_and(|end| end.row() < size && end.col() < size)
    }

    /// Returns the positions covered by the word, first letter first.
    #[must_use]
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        let (dr, dc) = self.direction.delta();
        (0..self.word.len())
            .map(move |i| Position::new(self.start.row() + dr * i, self.start.col() + dc * i))
    }

    /// Returns each covered position paired with the letter the word puts there.
    #[must_use]
    pub fn cells(&self) -> impl ExactSizeIterator<Item = (Position, Letter)> + '_ {
        self.positions().zip(self.word.letters())
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} {}", self.word, self.start, self.direction)
    }
}
