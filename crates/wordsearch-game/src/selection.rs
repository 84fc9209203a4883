use wordsearch_core::{Letter, LetterGrid, Position};

/// One cell traced by the player: where it is and which letter it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedCell {
    /// The cell position.
    pub position: Position,
    /// The letter displayed in the cell.
    pub letter: Letter,
}

impl SelectedCell {
    /// Creates a selected cell.
    #[must_use]
    pub const fn new(position: Position, letter: Letter) -> Self {
        Self { position, letter }
    }

    /// Creates a selected cell reading its letter from `grid`.
    ///
    /// Returns `None` if `position` is outside the grid.
    #[must_use]
    pub fn from_grid(grid: &LetterGrid, position: Position) -> Option<Self> {
        grid.get(position).map(|letter| Self { position, letter })
    }
}

/// The ordered cells traced during one selection gesture.
///
/// Cells are kept exactly as reported by the input layer, including repeats;
/// no contiguity or straightness is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<SelectedCell>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell.
    pub fn push(&mut self, cell: SelectedCell) {
        self.cells.push(cell);
    }

    /// Returns the traced cells in order.
    #[must_use]
    pub fn cells(&self) -> &[SelectedCell] {
        &self.cells
    }

    /// Returns the number of traced cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if nothing has been traced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `position` has been traced.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.cells.iter().any(|cell| cell.position == position)
    }

    /// Returns the traced letters in order.
    #[must_use]
    pub fn letters(&self) -> impl DoubleEndedIterator<Item = Letter> + ExactSizeIterator + '_ {
        self.cells.iter().map(|cell| cell.letter)
    }

    /// Returns the traced letters as a string.
    #[must_use]
    pub fn candidate(&self) -> String {
        self.letters().map(Letter::as_char).collect()
    }
}

impl FromIterator<SelectedCell> for Selection {
    fn from_iter<T: IntoIterator<Item = SelectedCell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<SelectedCell> for Selection {
    fn extend<T: IntoIterator<Item = SelectedCell>>(&mut self, iter: T) {
        self.cells.extend(iter);
    }
}
