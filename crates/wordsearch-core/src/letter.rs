//! Grid letter representation.

use std::fmt::{self, Display};

/// An uppercase Latin letter in the range `A`-`Z`.
///
/// Every grid cell and every word character is a `Letter`, so casing is
/// normalized once at the boundary and never compared again.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Letter;
///
/// let letter = Letter::from_char('q')?;
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.index(), 16);
///
/// assert_eq!(Letter::ALL.len(), 26);
/// assert!(Letter::from_char('4').is_err());
/// # Ok::<(), wordsearch_core::LetterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// An error returned when a character is not an ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LetterError {
    /// The character is outside `a`-`z` and `A`-`Z`.
    #[display("not an ASCII letter: {ch:?}")]
    NotAlphabetic {
        /// The rejected character.
        ch: char,
    },
}

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// Array containing all letters from `A` to `Z`.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(b'A'); Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from a character, folding lowercase to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`LetterError::NotAlphabetic`] if `ch` is not an ASCII letter.
    pub fn from_char(ch: char) -> Result<Self, LetterError> {
        if !ch.is_ascii_alphabetic() {
            return Err(LetterError::NotAlphabetic { ch });
        }
        u8::try_from(ch.to_ascii_uppercase())
            .map(Self)
            .map_err(|_| LetterError::NotAlphabetic { ch })
    }

    /// Creates a letter from its alphabet index (`0` is `A`, `25` is `Z`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-25.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 26, "letter index out of range");
        Self(b'A' + index)
    }

    /// Returns the alphabet index of this letter (0-25).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - b'A'
    }

    /// Returns this letter as an uppercase `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Letter::from_char('A').unwrap().index(), 0);
        assert_eq!(Letter::from_char('Z').unwrap().index(), 25);
        assert_eq!(Letter::from_char('m').unwrap(), Letter::from_char('M').unwrap());

        assert_eq!(Letter::ALL[0].as_char(), 'A');
        assert_eq!(Letter::ALL[25].as_char(), 'Z');
        for (i, letter) in (0..).zip(Letter::ALL) {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_index(i), letter);
        }

        assert_eq!(format!("{}", Letter::from_index(2)), "C");
        let ch: char = Letter::from_index(3).into();
        assert_eq!(ch, 'D');
    }

    #[test]
    fn test_rejects_non_letters() {
        for ch in ['0', ' ', '-', 'é', 'ß', '\n'] {
            assert_eq!(
                Letter::try_from(ch),
                Err(LetterError::NotAlphabetic { ch })
            );
        }
    }

    #[test]
    #[should_panic(expected = "letter index out of range")]
    fn test_from_index_26_panics() {
        let _ = Letter::from_index(26);
    }
}
