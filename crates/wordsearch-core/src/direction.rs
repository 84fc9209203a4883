//! Word orientations.

use std::fmt::{self, Display};

/// The orientation a word is laid out in.
///
/// Only forward orientations are supported: a word always reads left to
/// right, top to bottom, or top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Increasing column.
    Horizontal,
    /// Increasing row.
    Vertical,
    /// Increasing row and column together.
    Diagonal,
}

impl Direction {
    /// Array containing all supported directions.
    pub const ALL: [Self; 3] = [Self::Horizontal, Self::Vertical, Self::Diagonal];

    /// Returns the `(row, column)` step taken for each successive letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::Direction;
    ///
    /// assert_eq!(Direction::Horizontal.delta(), (0, 1));
    /// assert_eq!(Direction::Vertical.delta(), (1, 0));
    /// assert_eq!(Direction::Diagonal.delta(), (1, 1));
    /// ```
    #[must_use]
    pub const fn delta(self) -> (usize, usize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::Diagonal => (1, 1),
        }
    }

    /// Returns a human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Diagonal => "diagonal",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
