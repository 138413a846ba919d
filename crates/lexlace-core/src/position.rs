//! Board position (x, y) coordinate type.

use std::fmt::{self, Display};

/// A board coordinate: `x` is the column and `y` is the row, both zero-based
/// from the top-left corner.
///
/// # Examples
///
/// ```
/// use lexlace_core::Position;
///
/// let pos = Position::new(2, 4);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column and row indices.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column index.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row index.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
