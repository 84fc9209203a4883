use wordsearch_core::Word;

/// The words found so far in a puzzle session.
///
/// Words are kept in the order they were found. The set only grows; a new
/// puzzle starts from a new, empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    words: Vec<Word>,
}

impl FoundWords {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `word` has been found.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of words found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word has been found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the found words in the order they were found.
    #[must_use]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Word> {
        self.words.iter()
    }

    /// Returns a copy of this set with `word` added.
    #[must_use]
    pub fn with(&self, word: Word) -> Self {
        let mut next = self.clone();
        next.insert(word);
        next
    }

    /// Adds `word`, returning `false` if it was already present.
    pub(crate) fn insert(&mut self, word: Word) -> bool {
        if self.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }
}

impl<'a> IntoIterator for &'a FoundWords {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl FromIterator<Word> for FoundWords {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        let mut found = Self::new();
        for word in iter {
            found.insert(word);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_is_idempotent() {
        let cat = Word::new("CAT").unwrap();
        let found = FoundWords::new().with(cat.clone());
        assert_eq!(found.len(), 1);
        assert!(found.contains(&cat));

        let again = found.with(cat);
        assert_eq!(again, found);
    }

    #[test]
    fn test_keeps_discovery_order() {
        let found: FoundWords = ["MILK", "RICE", "MILK", "COW"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let words: Vec<_> = found.iter().map(Word::as_str).collect();
        assert_eq!(words, ["MILK", "RICE", "COW"]);
    }
}
