//! Six-faced letter dice.

use rand::{Rng, RngExt as _};

use crate::Letter;

/// The six face letters of one die.
///
/// # Examples
///
/// ```
/// use lexlace_core::{DieFaces, Letter};
///
/// let faces = DieFaces::from_ascii(b"AAEEGN");
/// assert_eq!(faces.faces()[0], Letter::A);
/// assert_eq!(faces.faces()[5], Letter::N);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieFaces([Letter; 6]);

impl DieFaces {
    /// Creates a face-set from six letters.
    #[must_use]
    pub const fn new(faces: [Letter; 6]) -> Self {
        Self(faces)
    }

    /// Creates a face-set from a six-byte ASCII string such as `b"AAEEGN"`.
    ///
    /// # Panics
    ///
    /// Panics if any byte is not an ASCII letter.
    #[must_use]
    pub const fn from_ascii(s: &[u8; 6]) -> Self {
        let mut faces = [Letter::A; 6];
        let mut i = 0;
        while i < 6 {
            faces[i] = match Letter::from_ascii(s[i]) {
                Some(letter) => letter,
                None => panic!("die face must be an ASCII letter"),
            };
            i += 1;
        }
        Self(faces)
    }

    /// Returns the six face letters.
    #[must_use]
    pub const fn faces(&self) -> &[Letter; 6] {
        &self.0
    }
}

/// A single board die: six fixed face letters and the face currently showing.
///
/// The current face is the only mutable state; it changes when the die is
/// rolled and is read live by the solver, so rolling and solving must be
/// sequenced, never interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    faces: DieFaces,
    current: Letter,
}

impl Die {
    /// Creates a die showing its first face.
    #[must_use]
    pub const fn new(faces: DieFaces) -> Self {
        Self {
            current: faces.0[0],
            faces,
        }
    }

    /// Returns the letter currently showing.
    #[must_use]
    pub const fn current(&self) -> Letter {
        self.current
    }

    /// Returns the six face letters.
    #[must_use]
    pub const fn faces(&self) -> &DieFaces {
        &self.faces
    }

    /// Re-rolls the die, selecting one of the six faces uniformly at random,
    /// and returns the new current letter.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Letter {
        self.current = self.faces.0[rng.random_range(0..6)];
        self.current
    }
}
