//! Grid cell coordinates.

use std::fmt::{self, Display};

use crate::Direction;

/// A cell position identified by row and column, both zero-based.
///
/// Positions are not tied to a particular grid; bounds are checked by the
/// grid types that consume them.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.step(Direction::Diagonal, 2), Some(Position::new(4, 5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (zero-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (zero-based, left to right).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position `distance` cells away along `direction`.
    ///
    /// Returns `None` on arithmetic overflow.
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add(dr.checked_mul(distance)?)?;
        let col = self.col.checked_add(dc.checked_mul(distance)?)?;
        Some(Self { row, col })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
