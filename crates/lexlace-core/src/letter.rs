//! Board-alphabet letter representation.

use std::fmt::{self, Display};

/// A letter of the English alphabet, `A` through `Z`.
///
/// Dictionary words arrive lowercase and board faces are displayed uppercase;
/// both normalize to this type at the boundary, so trie lookups and board
/// matching never compare raw characters of mixed case.
///
/// # Examples
///
/// ```
/// use lexlace_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter, Letter::Q);
/// assert_eq!(letter.to_char(), 'Q');
///
/// // Case-insensitive by construction
/// assert_eq!(Letter::from_char('Q'), Letter::from_char('q'));
///
/// // Non-alphabetic characters are rejected
/// assert_eq!(Letter::from_char('3'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Letter {
    /// The letter `A`.
    A,
    /// The letter `B`.
    B,
    /// The letter `C`.
    C,
    /// The letter `D`.
    D,
    /// The letter `E`.
    E,
    /// The letter `F`.
    F,
    /// The letter `G`.
    G,
    /// The letter `H`.
    H,
    /// The letter `I`.
    I,
    /// The letter `J`.
    J,
    /// The letter `K`.
    K,
    /// The letter `L`.
    L,
    /// The letter `M`.
    M,
    /// The letter `N`.
    N,
    /// The letter `O`.
    O,
    /// The letter `P`.
    P,
    /// The letter `Q`.
    Q,
    /// The letter `R`.
    R,
    /// The letter `S`.
    S,
    /// The letter `T`.
    T,
    /// The letter `U`.
    U,
    /// The letter `V`.
    V,
    /// The letter `W`.
    W,
    /// The letter `X`.
    X,
    /// The letter `Y`.
    Y,
    /// The letter `Z`.
    Z,
}

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// Array containing all letters from `A` to `Z` in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexlace_core::Letter;
    ///
    /// assert_eq!(Letter::ALL.len(), 26);
    /// assert_eq!(Letter::ALL[0], Letter::A);
    /// assert_eq!(Letter::ALL[25], Letter::Z);
    /// ```
    pub const ALL: [Self; Self::COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Creates a letter from an ASCII byte, normalizing case.
    ///
    /// Returns `None` for anything outside `a-z` / `A-Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexlace_core::Letter;
    ///
    /// assert_eq!(Letter::from_ascii(b'a'), Some(Letter::A));
    /// assert_eq!(Letter::from_ascii(b'A'), Some(Letter::A));
    /// assert_eq!(Letter::from_ascii(b'-'), None);
    /// ```
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        let lower = byte.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(Self::ALL[(lower - b'a') as usize])
        } else {
            None
        }
    }

    /// Creates a letter from a character, normalizing case.
    ///
    /// Returns `None` for anything outside the ASCII alphabet.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii() {
            Self::from_ascii(c as u8)
        } else {
            None
        }
    }

    /// Returns this letter's position in the alphabet (0-25).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the uppercase display character for this letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}
