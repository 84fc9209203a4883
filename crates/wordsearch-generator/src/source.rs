//! Sources of randomness for grid generation.

use rand::distr::{Distribution as _, Uniform};
use rand_pcg::Pcg64;
use wordsearch_core::{Direction, GridSize, Letter, Position};

use crate::{PuzzleSeed, seed::SeedStage};

/// Supplies the random choices made while generating a grid.
///
/// [`PuzzleGenerator`] asks for one direction and one anchor per placement
/// attempt (in that order), and one filler letter per cell left empty after
/// all words are processed.
///
/// Production code uses [`SeededSource`]. Tests can implement this trait to
/// script the exact attempts the generator makes.
///
/// [`PuzzleGenerator`]: crate::PuzzleGenerator
///
/// # Examples
///
/// ```
/// use wordsearch_core::{Direction, GridSize, Letter, Position, Word};
/// use wordsearch_generator::{PlacementSource, PuzzleGenerator};
///
/// // Always tries the top-left corner horizontally and fills with `X`.
/// struct Corner;
///
/// impl PlacementSource for Corner {
///     fn next_direction(&mut self) -> Direction {
///         Direction::Horizontal
///     }
///     fn next_anchor(&mut self, _size: GridSize) -> Position {
///         Position::new(0, 0)
///     }
///     fn next_filler(&mut self) -> Letter {
///         Letter::from_char('X').unwrap()
///     }
/// }
///
/// let generator = PuzzleGenerator::default();
/// let words = [Word::new("SUN")?];
/// let layout = generator.generate_grid_with_source(&words, &mut Corner);
/// assert_eq!(layout.grid.row(0)[..3].iter().map(|l| l.as_char()).collect::<String>(), "SUN");
/// # Ok::<(), wordsearch_core::WordError>(())
/// ```
pub trait PlacementSource {
    /// Returns the direction for the next placement attempt.
    fn next_direction(&mut self) -> Direction;

    /// Returns the anchor for the next placement attempt.
    ///
    /// Implementations should return positions inside `size`; anchors outside
    /// the grid are simply rejected as out of bounds.
    fn next_anchor(&mut self, size: GridSize) -> Position;

    /// Returns the letter for the next empty cell.
    fn next_filler(&mut self) -> Letter;
}

/// A [`PlacementSource`] drawing uniformly from streams derived from a
/// [`PuzzleSeed`].
///
/// Placement choices and filler letters come from separate streams, so the
/// number of empty cells never affects where words land.
#[derive(Debug, Clone)]
pub struct SeededSource {
    placement: Pcg64,
    filler: Pcg64,
}

impl SeededSource {
    /// Creates a source for the given seed.
    #[must_use]
    pub fn new(seed: PuzzleSeed) -> Self {
        Self {
            placement: seed.rng(SeedStage::Placement),
            filler: seed.rng(SeedStage::Filler),
        }
    }
}

/// Draws an index uniformly from `0..len`.
fn uniform_index(rng: &mut Pcg64, len: usize) -> usize {
    Uniform::new(0, len).map_or(0, |dist| dist.sample(rng))
}

impl PlacementSource for SeededSource {
    fn next_direction(&mut self) -> Direction {
        Direction::ALL[uniform_index(&mut self.placement, Direction::ALL.len())]
    }

    fn next_anchor(&mut self, size: GridSize) -> Position {
        let row = uniform_index(&mut self.placement, size.get());
        let col = uniform_index(&mut self.placement, size.get());
        Position::new(row, col)
    }

    fn next_filler(&mut self) -> Letter {
        Letter::ALL[uniform_index(&mut self.filler, Letter::COUNT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3";

    #[test]
    fn test_seeded_source_is_reproducible() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        let size = GridSize::new(15).unwrap();

        let mut a = SeededSource::new(seed);
        let mut b = SeededSource::new(seed);
        for _ in 0..100 {
            assert_eq!(a.next_direction(), b.next_direction());
            assert_eq!(a.next_anchor(size), b.next_anchor(size));
            assert_eq!(a.next_filler(), b.next_filler());
        }
    }

    #[test]
    fn test_seeded_source_stays_in_range() {
        let mut source = SeededSource::new(PuzzleSeed::random());
        for size in [1, 2, 5, 15] {
            let size = GridSize::new(size).unwrap();
            for _ in 0..200 {
                assert!(size.contains(source.next_anchor(size)));
            }
        }
    }

    #[test]
    fn test_seeded_source_covers_all_choices() {
        let mut source = SeededSource::new(SEED.parse().unwrap());

        let mut directions = [false; 3];
        let mut letters = [false; Letter::COUNT];
        for _ in 0..2000 {
            let direction = source.next_direction();
            let i = Direction::ALL.iter().position(|d| *d == direction).unwrap();
            directions[i] = true;
            letters[usize::from(source.next_filler().index())] = true;
        }
        assert!(directions.iter().all(|&seen| seen));
        assert!(letters.iter().all(|&seen| seen));
    }

    #[test]
    fn test_filler_stream_independent_of_placement_draws() {
        let seed: PuzzleSeed = SEED.parse().unwrap();
        let size = GridSize::new(10).unwrap();

        let mut a = SeededSource::new(seed);
        let mut b = SeededSource::new(seed);
        for _ in 0..17 {
            let _ = b.next_direction();
            let _ = b.next_anchor(size);
        }
        for _ in 0..20 {
            assert_eq!(a.next_filler(), b.next_filler());
        }
    }
}
