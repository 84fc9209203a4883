//! Reproducible puzzle seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal characters, so
/// a puzzle can be shared or replayed by its seed alone.
///
/// Each generation stage (word selection, placement, filler) draws from its
/// own stream derived from the seed with SHA-256. Changing how one stage
/// consumes randomness never shifts the others.
///
/// # Examples
///
/// ```
/// use wordsearch_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>()?, seed);
///
/// assert!("abc".parse::<PuzzleSeed>().is_err());
/// # Ok::<(), wordsearch_generator::PuzzleSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// An error returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("invalid hex character {ch:?} at index {index}")]
    InvalidDigit {
        /// The rejected character.
        ch: char,
        /// Character index of the rejected character.
        index: usize,
    },
}

/// The independent random streams derived from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeedStage {
    WordSelection,
    Placement,
    Filler,
}

impl SeedStage {
    fn label(self) -> &'static [u8] {
        match self {
            Self::WordSelection => b"word-selection",
            Self::Placement => b"placement",
            Self::Filler => b"filler",
        }
    }
}

impl PuzzleSeed {
    /// Creates a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn rng(self, stage: SeedStage) -> Pcg64 {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(stage.label());
        let derived: [u8; 32] = hasher.finalize().into();
        Pcg64::from_seed(derived)
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(PuzzleSeedError::InvalidLength { len });
        }

        let mut bytes = [0u8; 32];
        for (index, ch) in s.chars().enumerate() {
            let digit = ch
                .to_digit(16)
                .and_then(|digit| u8::try_from(digit).ok())
                .ok_or(PuzzleSeedError::InvalidDigit { ch, index })?;
            let byte = &mut bytes[index / 2];
            *byte = (*byte << 4) | digit;
        }
        Ok(Self(bytes))
    }
}
