//! Plain-text rendering of puzzles and game sessions.

use std::fmt::{self, Display};

use wordsearch_core::{LetterGrid, Position};
use wordsearch_game::Game;
use wordsearch_generator::GeneratedPuzzle;

/// Displays a grid with row and column indices.
///
/// Cells for which `is_found` returns `true` are shown in lowercase.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, F> {
    grid: &'a LetterGrid,
    is_found: F,
}

impl<'a, F> GridView<'a, F>
where
    F: Fn(Position) -> bool,
{
    #[must_use]
    pub fn new(grid: &'a LetterGrid, is_found: F) -> Self {
        Self { grid, is_found }
    }
}

impl<F> Display for GridView<'_, F>
where
    F: Fn(Position) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size().get();
        let width = (size - 1).to_string().len();

        write!(f, "{:width$}", "")?;
        for col in 0..size {
            write!(f, " {col:>width$}")?;
        }
        writeln!(f)?;

        for (row, letters) in self.grid.rows().enumerate() {
            write!(f, "{row:>width$}")?;
            for (col, letter) in letters.iter().enumerate() {
                let ch = if (self.is_found)(Position::new(row, col)) {
                    letter.as_char().to_ascii_lowercase()
                } else {
                    letter.as_char()
                };
                write!(f, " {ch:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Displays a freshly generated puzzle: seed, grid, words, and placements.
#[derive(Debug, Clone, Copy)]
pub struct PuzzleView<'a>(pub &'a GeneratedPuzzle);

impl Display for PuzzleView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let puzzle = self.0;
        writeln!(f, "Seed: {}", puzzle.seed)?;
        writeln!(f)?;
        writeln!(f, "{}", GridView::new(&puzzle.grid, |_| false))?;

        writeln!(f, "Words:")?;
        for outcome in &puzzle.placements {
            match outcome.placement() {
                Some(placement) => writeln!(f, "  {placement}")?,
                None => writeln!(
                    f,
                    "  {} (not placed after {} attempts)",
                    outcome.word(),
                    outcome.attempts()
                )?,
            }
        }
        Ok(())
    }
}

/// Displays a game session: the grid with found cells in lowercase, followed
/// by the word list.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a>(pub &'a Game);

impl Display for GameView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        writeln!(f, "{}", GridView::new(game.grid(), |pos| game.is_cell_found(pos)))?;

        let (found, total) = game.progress();
        writeln!(f, "Words ({found}/{total}):")?;
        for word in game.words() {
            let mark = if game.is_word_found(word) { 'x' } else { ' ' };
            writeln!(f, "  [{mark}] {word}")?;
        }
        Ok(())
    }
}
