//! Target word representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Letter, LetterError};

/// A puzzle word: a non-empty sequence of uppercase letters.
///
/// Construction folds the input to uppercase, so the generator and the
/// selection matcher always agree on casing.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Word;
///
/// let word: Word = "Pongal".parse()?;
/// assert_eq!(word.as_str(), "PONGAL");
/// assert_eq!(word.len(), 6);
/// assert_eq!(word.reversed().as_str(), "LAGNOP");
///
/// assert!(Word::new("").is_err());
/// assert!(Word::new("ice cream").is_err());
/// # Ok::<(), wordsearch_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    // Invariant: non-empty, ASCII uppercase only.
    text: String,
}

/// An error returned when text cannot be turned into a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The text contains no characters.
    #[display("word is empty")]
    Empty,
    /// The text contains a character that is not an ASCII letter.
    #[display("invalid character {ch:?} at index {index}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// Character index of the rejected character.
        index: usize,
    },
}

impl Word {
    /// Creates a word from text, folding it to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] for empty text and
    /// [`WordError::InvalidCharacter`] for anything that is not an ASCII letter.
    pub fn new(text: &str) -> Result<Self, WordError> {
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        let text = text
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                Letter::from_char(ch)
                    .map(Letter::as_char)
                    .map_err(|LetterError::NotAlphabetic { ch }| WordError::InvalidCharacter {
                        ch,
                        index,
                    })
            })
            .collect::<Result<String, _>>()?;
        Ok(Self { text })
    }

    /// Returns the uppercase text of this word.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; words are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the letter at `index`, if any.
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<Letter> {
        self.text
            .as_bytes()
            .get(index)
            .map(|&b| Letter::from_index(b - b'A'))
    }

    /// Returns an iterator over the letters in order.
    #[must_use]
    pub fn letters(&self) -> impl DoubleEndedIterator<Item = Letter> + ExactSizeIterator + '_ {
        self.text.bytes().map(|b| Letter::from_index(b - b'A'))
    }

    /// Returns this word spelled backwards.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            text: self.text.chars().rev().collect(),
        }
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
