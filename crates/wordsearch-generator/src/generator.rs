use wordsearch_core::{GridBuilder, GridSize, LetterGrid, Placement, Word};

use crate::{PlacementSource, PuzzleSeed, SeededSource, WordPool, seed::SeedStage};

/// Default number of placement attempts per word.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Default number of words drawn from a [`WordPool`].
pub const DEFAULT_WORD_COUNT: usize = 10;

/// Settings controlling puzzle generation.
///
/// # Examples
///
/// ```
/// use wordsearch_core::GridSize;
/// use wordsearch_generator::PuzzleConfig;
///
/// let config = PuzzleConfig::default()
///     .size(GridSize::new(12)?)
///     .word_count(8);
/// assert_eq!(config.get_size().get(), 12);
/// assert_eq!(config.get_word_count(), 8);
/// assert_eq!(config.get_max_attempts(), 100);
/// # Ok::<(), wordsearch_core::GridSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    size: GridSize,
    word_count: usize,
    max_attempts: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: GridSize::DEFAULT,
            word_count: DEFAULT_WORD_COUNT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PuzzleConfig {
    /// Sets the grid side length.
    #[must_use]
    pub fn size(mut self, size: GridSize) -> Self {
        self.size = size;
        self
    }

    /// Sets how many words are drawn from a pool.
    #[must_use]
    pub fn word_count(mut self, word_count: usize) -> Self {
        self.word_count = word_count;
        self
    }

    /// Sets the placement attempt budget per word.
    #[must_use]
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the grid side length.
    #[must_use]
    pub fn get_size(&self) -> GridSize {
        self.size
    }

    /// Returns how many words are drawn from a pool.
    #[must_use]
    pub fn get_word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the placement attempt budget per word.
    #[must_use]
    pub fn get_max_attempts(&self) -> usize {
        self.max_attempts
    }
}

/// The outcome of trying to embed one word.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum WordPlacement {
    /// The word was committed to the grid.
    Placed {
        /// Where the word was placed.
        placement: Placement,
        /// Attempts spent, including the successful one.
        attempts: usize,
    },
    /// The attempt budget ran out; the word is absent from the grid.
    Shortfall {
        /// The word that could not be placed.
        word: Word,
        /// Attempts spent.
        attempts: usize,
    },
}

impl WordPlacement {
    /// Returns the word this outcome is about.
    #[must_use]
    pub fn word(&self) -> &Word {
        match self {
            Self::Placed { placement, .. } => placement.word(),
            Self::Shortfall { word, .. } => word,
        }
    }

    /// Returns the placement if the word was placed.
    #[must_use]
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            Self::Placed { placement, .. } => Some(placement),
            Self::Shortfall { .. } => None,
        }
    }

    /// Returns the number of attempts spent on the word.
    #[must_use]
    pub fn attempts(&self) -> usize {
        match self {
            Self::Placed { attempts, .. } | Self::Shortfall { attempts, .. } => *attempts,
        }
    }
}

/// A finished grid together with the outcome for every input word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    /// The fully populated grid.
    pub grid: LetterGrid,
    /// One outcome per input word, in input order.
    pub placements: Vec<WordPlacement>,
}

/// A generated puzzle: the grid, its words, and the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The fully populated grid.
    pub grid: LetterGrid,
    /// The words the player has to find, in generation order.
    pub words: Vec<Word>,
    /// One outcome per word, in the same order as `words`.
    pub placements: Vec<WordPlacement>,
    /// The seed used to generate this puzzle.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the words that could not be placed.
    pub fn shortfalls(&self) -> impl Iterator<Item = &Word> {
        self.placements
            .iter()
            .filter(|outcome| outcome.is_shortfall())
            .map(WordPlacement::word)
    }
}

/// Generates word-search grids.
///
/// Each word is tried up to [`PuzzleConfig::get_max_attempts`] times: a
/// direction and an anchor are drawn, and the attempt succeeds if the word
/// stays inside the grid and agrees with every letter already committed.
/// Words are processed in input order, so earlier words win contested cells.
/// A word that never fits is reported as [`WordPlacement::Shortfall`] and is
/// simply absent. Finally every empty cell receives a random letter.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Word;
/// use wordsearch_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::default();
/// let words = ["RICE", "MILK", "POT"].map(|w| Word::new(w).unwrap());
/// let puzzle = generator.generate(&words);
///
/// assert_eq!(puzzle.grid.size().get(), 15);
/// for outcome in &puzzle.placements {
///     if let Some(placement) = outcome.placement() {
///         assert!(puzzle.grid.contains_placement(placement));
///     }
/// }
///
/// // The same seed reproduces the same puzzle.
/// let again = generator.generate_with_seed(&words, puzzle.seed);
/// assert_eq!(again, puzzle);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    config: PuzzleConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Generates a puzzle for `words` with a fresh random seed.
    #[must_use]
    pub fn generate(&self, words: &[Word]) -> GeneratedPuzzle {
        self.generate_with_seed(words, PuzzleSeed::random())
    }

    /// Generates the puzzle for `words` determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, words: &[Word], seed: PuzzleSeed) -> GeneratedPuzzle {
        log::debug!("generating {} word(s) with seed {seed}", words.len());
        let GridLayout { grid, placements } =
            self.generate_grid_with_source(words, &mut SeededSource::new(seed));
        GeneratedPuzzle {
            grid,
            words: words.to_vec(),
            placements,
            seed,
        }
    }

    /// Draws [`PuzzleConfig::get_word_count`] words from `pool` and generates
    /// a puzzle for them with a fresh random seed.
    #[must_use]
    pub fn generate_from_pool(&self, pool: &WordPool) -> GeneratedPuzzle {
        self.generate_from_pool_with_seed(pool, PuzzleSeed::random())
    }

    /// Draws words from `pool` and generates a puzzle, both determined by `seed`.
    #[must_use]
    pub fn generate_from_pool_with_seed(&self, pool: &WordPool, seed: PuzzleSeed) -> GeneratedPuzzle {
        let words = pool.choose_with(
            self.config.word_count,
            &mut seed.rng(SeedStage::WordSelection),
        );
        self.generate_with_seed(&words, seed)
    }

    /// Generates a grid for `words`, taking every random choice from `source`.
    #[must_use]
    pub fn generate_grid_with_source<S>(&self, words: &[Word], source: &mut S) -> GridLayout
    where
        S: PlacementSource + ?Sized,
    {
        let mut builder = GridBuilder::new(self.config.size);
        let placements = words
            .iter()
            .map(|word| self.place_word(&mut builder, word, source))
            .collect();
        let grid = builder.fill_empty(|_| source.next_filler());
        GridLayout { grid, placements }
    }

    fn place_word<S>(&self, builder: &mut GridBuilder, word: &Word, source: &mut S) -> WordPlacement
    where
        S: PlacementSource + ?Sized,
    {
        for attempt in 1..=self.config.max_attempts {
            let direction = source.next_direction();
            let start = source.next_anchor(builder.size());
            let placement = Placement::new(word.clone(), start, direction);
            match builder.place(&placement) {
                Ok(()) => {
                    log::trace!("placed {placement} on attempt {attempt}");
                    return WordPlacement::Placed {
                        placement,
                        attempts: attempt,
                    };
                }
                Err(rejection) => {
                    log::trace!("attempt {attempt} for {placement} rejected: {rejection}");
                }
            }
        }

        log::debug!(
            "could not place {word} within {} attempt(s)",
            self.config.max_attempts
        );
        WordPlacement::Shortfall {
            word: word.clone(),
            attempts: self.config.max_attempts,
        }
    }
}

/// Generates a puzzle of `size` for `words` with a fresh random seed and the
/// default attempt budget.
///
/// This is [`PuzzleGenerator::generate`] for callers that only choose the
/// grid size.
///
/// ```
/// use wordsearch_core::{GridSize, Word};
/// use wordsearch_generator::generate_grid;
///
/// let words = [Word::new("FARM")?, Word::new("COW")?];
/// let puzzle = generate_grid(GridSize::new(6)?, &words);
/// assert_eq!(puzzle.grid.size().get(), 6);
/// assert_eq!(puzzle.placements.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn generate_grid(size: GridSize, words: &[Word]) -> GeneratedPuzzle {
    PuzzleGenerator::new(PuzzleConfig::default().size(size)).generate(words)
}
