//! Grid sizes, the generation-time builder, and the finished letter grid.
//!
//! A grid goes through two phases:
//!
//! - [`GridBuilder`] owns a mutable board of optional letters while words are
//!   being placed. It only accepts placements that keep every committed letter
//!   intact.
//! - [`LetterGrid`] is the finished, fully populated board. It has no mutating
//!   methods, so once handed to players it cannot change.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Letter, Placement, PlacementRejection, Position};

/// The side length of a square grid. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize(usize);

/// An error returned when constructing a [`GridSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridSizeError {
    /// The requested side length is zero.
    #[display("grid size must be at least 1")]
    Zero,
}

impl GridSize {
    /// The side length used when none is configured.
    pub const DEFAULT: Self = Self(15);

    /// Creates a grid size.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError::Zero`] if `size` is zero.
    pub const fn new(size: usize) -> Result<Self, GridSizeError> {
        if size == 0 {
            return Err(GridSizeError::Zero);
        }
        Ok(Self(size))
    }

    /// Returns the side length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the number of cells (side length squared).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Returns `true` if `pos` lies inside a grid of this size.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row() < self.0 && pos.col() < self.0
    }

    /// Returns all positions in row-major order.
    #[must_use]
    pub fn positions(self) -> impl ExactSizeIterator<Item = Position> {
        let size = self.0;
        (0..size * size).map(move |i| Position::new(i / size, i % size))
    }

    fn offset(self, pos: Position) -> usize {
        pos.row() * self.0 + pos.col()
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl TryFrom<usize> for GridSize {
    type Error = GridSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

/// A partially filled grid used while placing words.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, GridBuilder, GridSize, Placement, PlacementRejection, Position, Word};
///
/// let mut builder = GridBuilder::new(GridSize::new(4)?);
/// let rice = Placement::new(Word::new("RICE")?, Position::new(0, 0), Direction::Horizontal);
/// builder.place(&rice).expect("fits");
///
/// // Sharing the `I` at (0, 1) is allowed.
/// let ink = Placement::new(Word::new("INK")?, Position::new(0, 1), Direction::Vertical);
/// assert!(builder.check(&ink).is_ok());
///
/// // Overwriting the `C` at (0, 2) is not.
/// let sun = Placement::new(Word::new("SUN")?, Position::new(0, 2), Direction::Vertical);
/// assert!(matches!(builder.check(&sun), Err(PlacementRejection::Collision { .. })));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuilder {
    size: GridSize,
    cells: Vec<Option<Letter>>,
}

impl GridBuilder {
    /// Creates a builder with every cell empty.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![None; size.cell_count()],
        }
    }

    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the letter committed at `pos`, or `None` if the cell is empty
    /// or outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        if !self.size.contains(pos) {
            return None;
        }
        self.cells[self.size.offset(pos)]
    }

    /// Returns the number of cells that are still empty.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Checks whether `placement` can be committed.
    ///
    /// A cell may be shared with an earlier word only if both need the same
    /// letter there.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementRejection::OutOfBounds`] if the word leaves the grid,
    /// or [`PlacementRejection::Collision`] for the first cell that already
    /// holds a different letter.
    pub fn check(&self, placement: &Placement) -> Result<(), PlacementRejection> {
        if !placement.fits_within(self.size) {
            return Err(PlacementRejection::OutOfBounds);
        }
        for (position, required) in placement.cells() {
            if let Some(existing) = self.cells[self.size.offset(position)]
                && existing != required
            {
                return Err(PlacementRejection::Collision {
                    position,
                    existing,
                    required,
                });
            }
        }
        Ok(())
    }

    /// Commits `placement` after [checking](Self::check) it.
    ///
    /// On rejection the builder is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the rejection reported by [`GridBuilder::check`].
    pub fn place(&mut self, placement: &Placement) -> Result<(), PlacementRejection> {
        self.check(placement)?;
        for (position, letter) in placement.cells() {
            let offset = self.size.offset(position);
            self.cells[offset] = Some(letter);
        }
        Ok(())
    }

    /// Fills every empty cell using `filler` and returns the finished grid.
    ///
    /// `filler` is called once per empty cell, in row-major order.
    #[must_use]
    pub fn fill_empty<F>(self, mut filler: F) -> LetterGrid
    where
        F: FnMut(Position) -> Letter,
    {
        let size = self.size;
        let cells = size
            .positions()
            .zip(self.cells)
            .map(|(pos, cell)| cell.unwrap_or_else(|| filler(pos)))
            .collect();
        LetterGrid { size, cells }
    }
}

/// A fully populated, immutable square grid of letters.
///
/// Produced by [`GridBuilder::fill_empty`] or parsed from text (one row per
/// line, whitespace ignored, case folded).
///
/// # Examples
///
/// ```
/// use wordsearch_core::{LetterGrid, Position};
///
/// let grid: LetterGrid = "
///     CAT
///     xoy
///     ZZW
/// "
/// .parse()?;
///
/// assert_eq!(grid.size().get(), 3);
/// assert_eq!(grid[Position::new(1, 1)].as_char(), 'O');
/// assert_eq!(grid.to_string(), "CAT\nXOY\nZZW");
/// # Ok::<(), wordsearch_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterGrid {
    size: GridSize,
    cells: Vec<Letter>,
}

/// An error returned when parsing a [`LetterGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text contains no rows.
    #[display("grid has no rows")]
    Empty,
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} letters, expected {expected}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Letters found in the row.
        len: usize,
        /// Letters required for a square grid.
        expected: usize,
    },
    /// A cell is not an ASCII letter.
    #[display("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidLetter {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The rejected character.
        ch: char,
    },
}

impl LetterGrid {
    /// Returns the grid size.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the letter at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        self.size
            .contains(pos)
            .then(|| self.cells[self.size.offset(pos)])
    }

    /// Returns one row of letters.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the grid.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Letter] {
        let size = self.size.get();
        &self.cells[row * size..(row + 1) * size]
    }

    /// Returns an iterator over the rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Letter]> {
        self.cells.chunks_exact(self.size.get())
    }

    /// Returns every position paired with its letter in row-major order.
    #[must_use]
    pub fn cells(&self) -> impl ExactSizeIterator<Item = (Position, Letter)> + '_ {
        self.size.positions().zip(self.cells.iter().copied())
    }

    /// Returns `true` if the grid spells the placement's word at its cells.
    #[must_use]
    pub fn contains_placement(&self, placement: &Placement) -> bool {
        placement.fits_within(self.size)
            && placement
                .cells()
                .all(|(pos, letter)| self.get(pos) == Some(letter))
    }
}

impl Index<Position> for LetterGrid {
    type Output = Letter;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.size.contains(pos), "position {pos} outside grid");
        &self.cells[self.size.offset(pos)]
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for letter in row {
                Display::fmt(letter, f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for LetterGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = GridSize::new(rows.len()).map_err(|GridSizeError::Zero| GridParseError::Empty)?;
        let mut cells = Vec::with_capacity(size.cell_count());
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != size.get() {
                return Err(GridParseError::NotSquare {
                    row,
                    len: chars.len(),
                    expected: size.get(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let letter =
                    Letter::from_char(ch).map_err(|_| GridParseError::InvalidLetter { row, col, ch })?;
                cells.push(letter);
            }
        }
        Ok(Self { size, cells })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Direction, Word};

    fn placement(word: &str, row: usize, col: usize, direction: Direction) -> Placement {
        Placement::new(Word::new(word).unwrap(), Position::new(row, col), direction)
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(GridSize::new(0), Err(GridSizeError::Zero));
        assert_eq!(GridSize::default().get(), 15);
        let size = GridSize::try_from(3).unwrap();
        assert_eq!(size.cell_count(), 9);
        assert!(size.contains(Position::new(2, 2)));
        assert!(!size.contains(Position::new(3, 0)));
        assert!(!size.contains(Position::new(0, 3)));

        let positions: Vec<_> = size.positions().collect();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[5], Position::new(1, 2));
        assert_eq!(positions[8], Position::new(2, 2));
    }

    #[test]
    fn test_builder_place_and_overlap() {
        let mut builder = GridBuilder::new(GridSize::new(5).unwrap());
        assert_eq!(builder.empty_count(), 25);

        builder
            .place(&placement("CAT", 2, 0, Direction::Horizontal))
            .unwrap();
        assert_eq!(builder.empty_count(), 22);
        assert_eq!(builder.get(Position::new(2, 1)).map(Letter::as_char), Some('A'));

        // Shares the `A` at (2, 1).
        builder
            .place(&placement("MAP", 1, 1, Direction::Vertical))
            .unwrap();
        assert_eq!(builder.empty_count(), 20);

        // Would overwrite the `T` at (2, 2) with `O`.
        let before = builder.clone();
        let rejection = builder
            .place(&placement("MOP", 1, 1, Direction::Diagonal))
            .unwrap_err();
        assert_eq!(
            rejection,
            PlacementRejection::Collision {
                position: Position::new(2, 2),
                existing: Letter::from_char('T').unwrap(),
                required: Letter::from_char('O').unwrap(),
            }
        );
        assert_eq!(builder, before);

        assert_eq!(
            builder.check(&placement("SWEET", 1, 1, Direction::Horizontal)),
            Err(PlacementRejection::OutOfBounds)
        );
    }

    #[test]
    fn test_builder_fill_empty() {
        let mut builder = GridBuilder::new(GridSize::new(2).unwrap());
        builder
            .place(&placement("AB", 0, 0, Direction::Horizontal))
            .unwrap();
        let mut filled = Vec::new();
        let grid = builder.fill_empty(|pos| {
            filled.push(pos);
            Letter::from_char('Z').unwrap()
        });
        assert_eq!(filled, [Position::new(1, 0), Position::new(1, 1)]);
        assert_eq!(grid.to_string(), "AB\nZZ");
    }

    #[test]
    fn test_letter_grid_access() {
        let grid: LetterGrid = "RICE\nAXQZ\nMOON\nPLUM".parse().unwrap();
        assert_eq!(grid.get(Position::new(2, 3)).map(Letter::as_char), Some('N'));
        assert_eq!(grid.get(Position::new(4, 0)), None);
        assert_eq!(grid.rows().len(), 4);
        assert_eq!(grid.cells().len(), 16);

        assert!(grid.contains_placement(&placement("RICE", 0, 0, Direction::Horizontal)));
        assert!(grid.contains_placement(&placement("RAMP", 0, 0, Direction::Vertical)));
        assert!(grid.contains_placement(&placement("RXOM", 0, 0, Direction::Diagonal)));
        assert!(!grid.contains_placement(&placement("RICH", 0, 0, Direction::Horizontal)));
        assert!(!grid.contains_placement(&placement("MOONS", 2, 0, Direction::Horizontal)));
    }

    #[test]
    #[should_panic(expected = "outside grid")]
    fn test_index_out_of_bounds_panics() {
        let grid: LetterGrid = "AB\nCD".parse().unwrap();
        let _letter = grid[Position::new(0, 2)];
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<LetterGrid>(), Err(GridParseError::Empty));
        assert_eq!("  \n\n".parse::<LetterGrid>(), Err(GridParseError::Empty));
        assert_eq!(
            "AB\nC".parse::<LetterGrid>(),
            Err(GridParseError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            "AB\nC3".parse::<LetterGrid>(),
            Err(GridParseError::InvalidLetter {
                row: 1,
                col: 1,
                ch: '3'
            })
        );
    }

    proptest! {
        #[test]
        fn prop_display_parse_roundtrip(size in 1usize..12, seed in any::<u64>()) {
            let size = GridSize::new(size).unwrap();
            let mut state = seed;
            let grid = GridBuilder::new(size).fill_empty(|_| {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                Letter::from_index(u8::try_from((state >> 33) % 26).unwrap())
            });
            let parsed: LetterGrid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }

        #[test]
        fn prop_place_never_overwrites(
            size in 1usize..8,
            attempts in prop::collection::vec(("[A-C]{1,4}", 0usize..8, 0usize..8, 0usize..3), 0..20),
        ) {
            let size = GridSize::new(size).unwrap();
            let mut builder = GridBuilder::new(size);
            for (text, row, col, dir) in attempts {
                let p = placement(&text, row, col, Direction::ALL[dir]);
                let before = builder.clone();
                match builder.place(&p) {
                    Ok(()) => {
                        for pos in size.positions() {
                            if let Some(letter) = before.get(pos) {
                                prop_assert_eq!(builder.get(pos), Some(letter));
                            }
                        }
                        for (pos, letter) in p.cells() {
                            prop_assert!(size.contains(pos));
                            prop_assert_eq!(builder.get(pos), Some(letter));
                        }
                    }
                    Err(_) => {
                        prop_assert_eq!(&builder, &before);
                    }
                }
            }
        }
    }
}
