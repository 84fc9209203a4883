use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;
use wordsearch_core::Word;

use crate::{PuzzleSeed, seed::SeedStage};

const FESTIVAL_WORDS: [&str; 20] = [
    "PONGAL",
    "SUN",
    "RICE",
    "MILK",
    "COW",
    "POT",
    "FIRE",
    "KOLAM",
    "SWEET",
    "FARM",
    "HARVEST",
    "SUGARCANE",
    "JAGGERY",
    "TEMPLE",
    "FESTIVAL",
    "TRADITION",
    "BLESSING",
    "FAMILY",
    "PRAYER",
    "GRATITUDE",
];

/// A vocabulary that puzzle word lists are drawn from.
///
/// Words are kept in insertion order with duplicates removed, so any subset
/// drawn from the pool is a valid, duplicate-free puzzle word list.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::{PuzzleSeed, WordPool};
///
/// let pool = WordPool::festival();
/// assert_eq!(pool.len(), 20);
///
/// let words = pool.choose(10, PuzzleSeed::random());
/// assert_eq!(words.len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Creates a pool, dropping repeated words.
    #[must_use]
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut unique: Vec<Word> = Vec::new();
        for word in words {
            if !unique.contains(&word) {
                unique.push(word);
            }
        }
        Self { words: unique }
    }

    /// Returns the built-in harvest festival vocabulary.
    #[must_use]
    pub fn festival() -> Self {
        Self::new(FESTIVAL_WORDS.iter().filter_map(|w| Word::new(w).ok()))
    }

    /// Returns the words in the pool.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the number of words in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the pool has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draws up to `count` distinct words in random order, determined by `seed`.
    ///
    /// Returns every word (shuffled) if the pool holds fewer than `count`.
    #[must_use]
    pub fn choose(&self, count: usize, seed: PuzzleSeed) -> Vec<Word> {
        self.choose_with(count, &mut seed.rng(SeedStage::WordSelection))
    }

    pub(crate) fn choose_with(&self, count: usize, rng: &mut Pcg64) -> Vec<Word> {
        let mut words = self.words.clone();
        words.shuffle(rng);
        words.truncate(count);
        words
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self::festival()
    }
}

impl FromIterator<Word> for WordPool {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self::new(iter)
    }
}
