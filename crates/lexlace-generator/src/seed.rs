//! Board seeds: reproducible randomness for generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Errors raised when parsing a [`BoardSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// The string contains a character outside `0-9a-fA-F`.
    #[display("seed contains a non-hex character")]
    InvalidCharacter,
}

/// A 32-byte seed identifying one generated board.
///
/// The same seed always reproduces the same die placement and the same rolled
/// letters, which makes boards shareable and tests deterministic. Seeds
/// render as 64 lowercase hex characters and parse back via [`FromStr`].
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use lexlace_generator::BoardSeed;
///
/// let seed = BoardSeed::from_phrase("friday night game");
/// let round_trip = BoardSeed::from_str(&seed.to_string())?;
/// assert_eq!(seed, round_trip);
/// # Ok::<(), lexlace_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0_u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase by hashing it.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the deterministic RNG stream for this seed.
    pub(crate) fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0_u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let hi = hex_value(pair[0]).ok_or(ParseSeedError::InvalidCharacter)?;
            let lo = hex_value(pair[1]).ok_or(ParseSeedError::InvalidCharacter)?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let seed = BoardSeed::from_bytes([0xAB; 32]);
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text, "ab".repeat(32));
        assert_eq!(BoardSeed::from_str(&text).unwrap(), seed);
    }

    #[test]
    fn test_parse_accepts_uppercase_hex() {
        let seed = BoardSeed::from_str(&"AB".repeat(32)).unwrap();
        assert_eq!(seed, BoardSeed::from_bytes([0xAB; 32]));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            BoardSeed::from_str("abcd"),
            Err(ParseSeedError::InvalidLength { len: 4 }),
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let mut text = "ab".repeat(32);
        text.replace_range(10..11, "g");
        assert_eq!(
            BoardSeed::from_str(&text),
            Err(ParseSeedError::InvalidCharacter),
        );
    }

    #[test]
    fn test_phrase_seeds_are_stable_and_distinct() {
        assert_eq!(
            BoardSeed::from_phrase("lexlace"),
            BoardSeed::from_phrase("lexlace"),
        );
        assert_ne!(
            BoardSeed::from_phrase("lexlace"),
            BoardSeed::from_phrase("lexlace2"),
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(BoardSeed::random(), BoardSeed::random());
    }
}
