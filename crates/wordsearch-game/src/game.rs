use std::{collections::BTreeSet, time::Duration};

use wordsearch_core::{LetterGrid, Position, Word};
use wordsearch_generator::{GeneratedPuzzle, PuzzleSeed};

use crate::{
    Completion, FoundWords, GameError, MatchResult, SelectedCell, Selection, resolve_selection,
};

/// What one finished gesture did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureOutcome {
    /// The match result of the gesture.
    pub result: MatchResult,
    /// Set when this gesture found the last outstanding word.
    pub completion: Option<Completion>,
}

/// A word-search game session.
///
/// Holds the puzzle, the words found so far, the cells covered by them, and
/// the gesture in progress. A gesture is a pointer-down on one cell
/// ([`begin_selection`](Self::begin_selection)), any number of further cells
/// ([`extend_selection`](Self::extend_selection)), and a pointer-up
/// ([`finish_selection`](Self::finish_selection)) that is resolved against
/// the word list.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use wordsearch_core::Word;
/// use wordsearch_game::{Game, MatchResult};
/// use wordsearch_generator::PuzzleGenerator;
///
/// let words = ["RICE", "MILK"].map(|w| Word::new(w).unwrap());
/// let puzzle = PuzzleGenerator::default().generate(&words);
/// let placements: Vec<_> = puzzle
///     .placements
///     .iter()
///     .filter_map(|outcome| outcome.placement().cloned())
///     .collect();
/// let mut game = Game::new(puzzle);
///
/// for placement in &placements {
///     let mut cells = placement.positions();
///     game.begin_selection(cells.next().unwrap())?;
///     for pos in cells {
///         game.extend_selection(pos)?;
///     }
///     let outcome = game.finish_selection(Duration::from_secs(30));
///     assert_eq!(outcome.result, MatchResult::Matched(placement.word().clone()));
/// }
///
/// assert_eq!(game.is_completed(), placements.len() == words.len());
/// # Ok::<(), wordsearch_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: LetterGrid,
    words: Vec<Word>,
    seed: PuzzleSeed,
    found: FoundWords,
    found_cells: BTreeSet<Position>,
    selection: Option<Selection>,
    completion: Option<Completion>,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Repeated words are kept once, so every word in the list has to be found
    /// exactly once. Words the generator could not place stay in the list.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            grid,
            words,
            placements: _,
            seed,
        } = puzzle;

        let mut unique = Vec::with_capacity(words.len());
        for word in words {
            if !unique.contains(&word) {
                unique.push(word);
            }
        }

        Self {
            grid,
            words: unique,
            seed,
            found: FoundWords::new(),
            found_cells: BTreeSet::new(),
            selection: None,
            completion: None,
        }
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the words to find, in puzzle order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the seed that reproduces this puzzle.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Starts a gesture on `pos`, discarding any gesture in progress.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the grid. The
    /// current gesture is left untouched in that case.
    pub fn begin_selection(&mut self, pos: Position) -> Result<(), GameError> {
        let cell = self.selected_cell(pos)?;
        self.selection = Some(Selection::from_iter([cell]));
        Ok(())
    }

    /// Adds `pos` to the gesture in progress.
    ///
    /// Cells are recorded as given, even when they repeat or are not adjacent
    /// to the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveSelection`] if no gesture is in progress,
    /// or [`GameError::OutOfBounds`] if `pos` is outside the grid.
    pub fn extend_selection(&mut self, pos: Position) -> Result<(), GameError> {
        let cell = self.selected_cell(pos)?;
        let selection = self
            .selection
            .as_mut()
            .ok_or(GameError::NoActiveSelection)?;
        selection.push(cell);
        Ok(())
    }

    /// Discards the gesture in progress without resolving it.
    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    /// Returns the gesture in progress, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.selection.is_some()
    }

    /// Ends the gesture in progress and resolves it against the word list.
    ///
    /// `elapsed` is the time since the puzzle started; it is only used for the
    /// [`Completion`] reported when this gesture finds the last outstanding
    /// word. Finishing without a gesture is a [`MatchResult::NoMatch`].
    pub fn finish_selection(&mut self, elapsed: Duration) -> GestureOutcome {
        let Some(selection) = self.selection.take() else {
            return GestureOutcome {
                result: MatchResult::NoMatch,
                completion: None,
            };
        };

        let resolution = resolve_selection(selection.cells(), &self.words, &self.found);
        self.found = resolution.found;

        let mut completion = None;
        if resolution.result.is_matched() {
            self.found_cells
                .extend(selection.cells().iter().map(|cell| cell.position));
            if self.completion.is_none() && self.found.len() == self.words.len() {
                completion = Some(Completion { elapsed });
                self.completion = completion;
            }
        }

        GestureOutcome {
            result: resolution.result,
            completion,
        }
    }

    /// Returns `true` if `pos` is part of the gesture in progress.
    #[must_use]
    pub fn is_cell_selected(&self, pos: Position) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|selection| selection.contains(pos))
    }

    /// Returns `true` if `pos` was traced by a gesture that found a word.
    #[must_use]
    pub fn is_cell_found(&self, pos: Position) -> bool {
        self.found_cells.contains(&pos)
    }

    /// Returns the words found so far.
    #[must_use]
    pub fn found_words(&self) -> &FoundWords {
        &self.found
    }

    /// Returns `true` if `word` has been found.
    #[must_use]
    pub fn is_word_found(&self, word: &Word) -> bool {
        self.found.contains(word)
    }

    /// Returns the words not found yet, in puzzle order.
    pub fn remaining_words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|word| !self.found.contains(word))
    }

    /// Returns the number of words found and the total number of words.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.found.len(), self.words.len())
    }

    /// Returns `true` once every word has been found.
    ///
    /// A puzzle without words is never completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    /// Returns the completion, once every word has been found.
    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        self.completion
    }

    fn selected_cell(&self, pos: Position) -> Result<SelectedCell, GameError> {
        SelectedCell::from_grid(&self.grid, pos).ok_or(GameError::OutOfBounds { position: pos })
    }
}
