//! Matching traced selections against puzzle words.
//!
//! Matching is a pure function of the traced letters, the word list, and the
//! words already found. It compares strings only: the geometry of the traced
//! cells is the input layer's concern.

use wordsearch_core::{Letter, Word};

use crate::{FoundWords, SelectedCell};

/// The result of resolving one selection.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum MatchResult {
    /// The selection spells a word (forwards or backwards) that had not been
    /// found yet.
    Matched(Word),
    /// The selection spells a word that was already found. Nothing changes.
    AlreadyFound(Word),
    /// The selection is empty or spells no word of the puzzle.
    NoMatch,
}

impl MatchResult {
    /// Returns the newly found word, if any.
    #[must_use]
    pub fn matched_word(&self) -> Option<&Word> {
        match self {
            Self::Matched(word) => Some(word),
            Self::AlreadyFound(_) | Self::NoMatch => None,
        }
    }
}

/// A match result together with the updated found-word set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResolution {
    /// What the selection matched.
    pub result: MatchResult,
    /// The found words after this selection: the previous set plus the
    /// matched word, if any.
    pub found: FoundWords,
}

/// Resolves a traced selection against the puzzle words.
///
/// The traced letters are compared, forwards and reversed, with each word of
/// `words` in order. The first word that matches and is not yet in `found`
/// becomes [`MatchResult::Matched`] and is added to the returned set. If every
/// matching word was already found the result is
/// [`MatchResult::AlreadyFound`] and the set is returned unchanged, as it is
/// for [`MatchResult::NoMatch`].
///
/// # Examples
///
/// ```
/// use wordsearch_core::{LetterGrid, Position, Word};
/// use wordsearch_game::{FoundWords, MatchResult, SelectedCell, resolve_selection};
///
/// let grid: LetterGrid = "TAC\nDOG\nXYZ".parse()?;
/// let words = [Word::new("CAT")?, Word::new("DOG")?];
///
/// // Tracing T-A-C matches CAT backwards.
/// let cells: Vec<_> = (0..3)
///     .filter_map(|col| SelectedCell::from_grid(&grid, Position::new(0, col)))
///     .collect();
/// let resolution = resolve_selection(&cells, &words, &FoundWords::new());
/// assert_eq!(resolution.result, MatchResult::Matched(words[0].clone()));
/// assert!(resolution.found.contains(&words[0]));
///
/// // Tracing it again is a no-op.
/// let again = resolve_selection(&cells, &words, &resolution.found);
/// assert_eq!(again.result, MatchResult::AlreadyFound(words[0].clone()));
/// assert_eq!(again.found, resolution.found);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn resolve_selection(
    cells: &[SelectedCell],
    words: &[Word],
    found: &FoundWords,
) -> SelectionResolution {
    let letters: Vec<Letter> = cells.iter().map(|cell| cell.letter).collect();
    resolve_letters(&letters, words, found)
}

/// Resolves traced letters against the puzzle words.
///
/// This is [`resolve_selection`] for callers that only have the letters.
#[must_use]
pub fn resolve_letters(
    letters: &[Letter],
    words: &[Word],
    found: &FoundWords,
) -> SelectionResolution {
    let result = match_letters(letters, words, found);
    let found = match &result {
        MatchResult::Matched(word) => found.with(word.clone()),
        MatchResult::AlreadyFound(_) | MatchResult::NoMatch => found.clone(),
    };
    SelectionResolution { result, found }
}

fn match_letters(letters: &[Letter], words: &[Word], found: &FoundWords) -> MatchResult {
    if letters.is_empty() {
        return MatchResult::NoMatch;
    }

    let mut already_found = None;
    for word in words.iter().filter(|word| spells(letters, word)) {
        if !found.contains(word) {
            return MatchResult::Matched(word.clone());
        }
        already_found.get_or_insert(word);
    }
    already_found.map_or(MatchResult::NoMatch, |word| MatchResult::AlreadyFound(word.clone()))
}

fn spells(letters: &[Letter], word: &Word) -> bool {
    letters.len() == word.len()
        && (word.letters().eq(letters.iter().copied())
            || word.letters().eq(letters.iter().rev().copied()))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn words(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn letters(text: &str) -> Vec<Letter> {
        text.chars().map(|ch| Letter::from_char(ch).unwrap()).collect()
    }

    #[test]
    fn test_forward_and_reverse_match() {
        let words = words(&["CAT", "DOG"]);
        let found = FoundWords::new();

        let forward = resolve_letters(&letters("CAT"), &words, &found);
        assert_eq!(forward.result, MatchResult::Matched(words[0].clone()));

        let reverse = resolve_letters(&letters("TAC"), &words, &found);
        assert_eq!(reverse.result, MatchResult::Matched(words[0].clone()));
        assert_eq!(reverse.found.len(), 1);

        // Lowercase input folds to the same letters.
        let lower = resolve_letters(&letters("god"), &words, &found);
        assert_eq!(lower.result, MatchResult::Matched(words[1].clone()));
    }

    #[test]
    fn test_no_match() {
        let words = words(&["CAT", "DOG"]);
        let found = FoundWords::new().with(words[1].clone());

        for text in ["", "CA", "CATS", "ACT", "DGO"] {
            let resolution = resolve_letters(&letters(text), &words, &found);
            assert_eq!(resolution.result, MatchResult::NoMatch, "{text:?}");
            assert_eq!(resolution.found, found);
        }
        assert!(resolve_selection(&[], &words, &found).result.is_no_match());
    }

    #[test]
    fn test_already_found_is_noop() {
        let words = words(&["CAT", "DOG"]);
        let found = FoundWords::new().with(words[0].clone());

        let resolution = resolve_letters(&letters("CAT"), &words, &found);
        assert_eq!(resolution.result, MatchResult::AlreadyFound(words[0].clone()));
        assert_eq!(resolution.result.matched_word(), None);
        assert_eq!(resolution.found, found);
    }

    #[test]
    fn test_reverse_pair_prefers_outstanding_word() {
        // Both words match "TOP"/"POT"; the unfound one is credited.
        let words = words(&["POT", "TOP"]);

        let first = resolve_letters(&letters("POT"), &words, &FoundWords::new());
        assert_eq!(first.result, MatchResult::Matched(words[0].clone()));

        let second = resolve_letters(&letters("POT"), &words, &first.found);
        assert_eq!(second.result, MatchResult::Matched(words[1].clone()));
        assert_eq!(second.found.len(), 2);

        let third = resolve_letters(&letters("TOP"), &words, &second.found);
        assert_eq!(third.result, MatchResult::AlreadyFound(words[0].clone()));
    }

    #[test]
    fn test_last_word_completes_list() {
        let words = words(&[
            "PONGAL", "SUN", "RICE", "MILK", "COW", "POT", "FIRE", "KOLAM", "SWEET", "FARM",
        ]);
        let found: FoundWords = words[..9].iter().cloned().collect();

        let resolution = resolve_letters(&letters("MRAF"), &words, &found);
        assert_eq!(resolution.result, MatchResult::Matched(words[9].clone()));
        assert_eq!(resolution.found.len(), words.len());
    }

    proptest! {
        #[test]
        fn prop_reverse_symmetry(list in prop::collection::vec("[A-Z]{1,6}", 1..8), pick in any::<prop::sample::Index>()) {
            let words: Vec<Word> = list.iter().map(|w| Word::new(w).unwrap()).collect();
            let target = pick.get(&words);
            let forward: Vec<Letter> = target.letters().collect();
            let backward: Vec<Letter> = target.letters().rev().collect();

            let found = FoundWords::new();
            let a = resolve_letters(&forward, &words, &found);
            let b = resolve_letters(&backward, &words, &found);
            prop_assert!(a.result.is_matched());
            prop_assert_eq!(&a, &b);

            // Resolving every spelling of an already-credited word again never
            // credits anything twice.
            let mut found = FoundWords::new();
            for _ in 0..=words.len() {
                let next = resolve_letters(&forward, &words, &found);
                if let MatchResult::Matched(word) = &next.result {
                    prop_assert!(!found.contains(word));
                    prop_assert_eq!(next.found.len(), found.len() + 1);
                } else {
                    prop_assert_eq!(&next.found, &found);
                }
                found = next.found;
            }
        }
    }
}
