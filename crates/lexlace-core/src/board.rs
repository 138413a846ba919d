//! The letter board: dice placed on a fixed grid with precomputed adjacency.

use std::fmt::{self, Display};

use rand::Rng;

use crate::{Die, DieFaces, Position};

/// Errors raised when a [`Board`] cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The face-set pool has fewer entries than the board has cells.
    #[display("not enough dice for the board: need {needed}, got {available}")]
    NotEnoughDice {
        /// Number of cells to fill.
        needed: usize,
        /// Number of face-sets supplied.
        available: usize,
    },
}

/// A fixed arrangement of dice with a precomputed symmetric adjacency graph.
///
/// Cells are addressed either by [`Position`] or by a row-major cell index.
/// Each cell's neighbors are the up-to-eight surrounding cells, clipped at the
/// board edges (3 for a corner, 5 for an edge, 8 for an interior cell). The
/// neighbor lists are computed once at construction and never change; only the
/// dice's current letters mutate, via [`roll_all`](Self::roll_all).
///
/// # Examples
///
/// ```
/// use lexlace_core::{Board, DieFaces, Position};
///
/// let faces = vec![DieFaces::from_ascii(b"AAEEGN"); 25];
/// let board = Board::new(&faces, 5, 5)?;
///
/// assert_eq!(board.cell_count(), 25);
/// // A corner cell touches exactly three others.
/// let corner = board.index_of(Position::new(0, 0));
/// assert_eq!(board.neighbors_of(corner).len(), 3);
/// # Ok::<(), lexlace_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    dice: Vec<Die>,
    neighbors: Vec<Vec<usize>>,
}

impl Board {
    /// Creates a board by placing one face-set per cell, in row-major order,
    /// and computing every cell's neighbor list.
    ///
    /// Face-sets beyond `rows * cols` are ignored; shuffling the pool before
    /// placement is the caller's concern. Each die starts showing its first
    /// face; roll the board before play.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotEnoughDice`] if `faces` has fewer entries than
    /// the board has cells.
    pub fn new(faces: &[DieFaces], rows: u8, cols: u8) -> Result<Self, BoardError> {
        let cells = usize::from(rows) * usize::from(cols);
        if faces.len() < cells {
            return Err(BoardError::NotEnoughDice {
                needed: cells,
                available: faces.len(),
            });
        }

        let dice = faces[..cells].iter().copied().map(Die::new).collect();
        let neighbors = compute_neighbors(rows, cols);
        Ok(Self {
            rows,
            cols,
            dice,
            neighbors,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> u8 {
        self.cols
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.dice.len()
    }

    /// Converts a position into its row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the board.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> usize {
        assert!(
            pos.x() < self.cols && pos.y() < self.rows,
            "position {pos} out of bounds for a {}x{} board",
            self.rows,
            self.cols,
        );
        usize::from(pos.y()) * usize::from(self.cols) + usize::from(pos.x())
    }

    /// Converts a row-major cell index into a position.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Position {
        assert!(index < self.cell_count(), "cell index {index} out of range");
        let cols = usize::from(self.cols);
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((index % cols) as u8, (index / cols) as u8);
        Position::new(x, y)
    }

    /// Returns the die at a position.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the board.
    #[must_use]
    pub fn die_at(&self, pos: Position) -> &Die {
        &self.dice[self.index_of(pos)]
    }

    /// Returns the die at a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[must_use]
    pub fn die(&self, index: usize) -> &Die {
        &self.dice[index]
    }

    /// Returns the cell indices adjacent to `index`, in the 8 surrounding
    /// directions clipped at the board edges.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[must_use]
    pub fn neighbors_of(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |y| (0..cols).map(move |x| Position::new(x, y)))
    }

    /// Re-rolls every die, independently selecting one of its six faces
    /// uniformly at random. Neighbor lists are unaffected.
    ///
    /// Must not run while a solve is reading the board; re-roll first, then
    /// solve.
    pub fn roll_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for die in &mut self.dice {
            die.roll(&mut *rng);
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.cols {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.die_at(Position::new(x, y)).current())?;
            }
        }
        Ok(())
    }
}

/// Builds the per-cell neighbor lists for a `rows` x `cols` grid.
///
/// The result is symmetric: `b` appears in `a`'s list iff `a` appears in `b`'s.
fn compute_neighbors(rows: u8, cols: u8) -> Vec<Vec<usize>> {
    let (rows, cols) = (usize::from(rows), usize::from(cols));
    let mut neighbors = Vec::with_capacity(rows * cols);
    for y in 0..rows {
        for x in 0..cols {
            let mut list = Vec::with_capacity(8);
            for ny in y.saturating_sub(1)..=(y + 1).min(rows - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(cols - 1) {
                    if nx == x && ny == y {
                        continue;
                    }
                    list.push(ny * cols + nx);
                }
            }
            neighbors.push(list);
        }
    }
    neighbors
}
