//! Seeded board generation: shuffle the pool, place the dice, roll them all.

use lexlace_core::{Board, BoardError, DieFaces};
use rand::seq::SliceRandom as _;

use crate::{BoardSeed, pool};

/// A board produced by [`BoardGenerator`], together with the seed that made
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The rolled board, ready to solve.
    pub board: Board,
    /// The seed that reproduces this exact board.
    pub seed: BoardSeed,
}

/// Generates rolled boards from a die pool.
///
/// Generation is the one place randomness enters the system, and it is fully
/// seed-driven: the pool is repeated to cover the board, shuffled, truncated
/// to the cell count, placed row-major, and every die is rolled, all from a
/// single [`BoardSeed`]-derived RNG stream. The adjacency graph comes from
/// [`Board::new`] and depends only on the dimensions.
///
/// # Examples
///
/// ```
/// use lexlace_generator::{BoardGenerator, BoardSeed};
///
/// let generator = BoardGenerator::classic();
/// let seed = BoardSeed::from_phrase("doc example");
///
/// let first = generator.generate_with_seed(seed);
/// let second = generator.generate_with_seed(seed);
/// assert_eq!(first, second);
/// assert_eq!(first.board.cell_count(), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGenerator {
    rows: u8,
    cols: u8,
    pool: Vec<DieFaces>,
}

impl BoardGenerator {
    /// Creates the classic layout: a 5x5 board drawn from
    /// [`pool::CLASSIC_POOL`].
    #[must_use]
    pub fn classic() -> Self {
        Self {
            rows: 5,
            cols: 5,
            pool: pool::CLASSIC_POOL.to_vec(),
        }
    }

    /// Creates a generator for a `rows` x `cols` board drawn from the classic
    /// pool.
    #[must_use]
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            pool: pool::CLASSIC_POOL.to_vec(),
        }
    }

    /// Creates a generator drawing from a custom die pool.
    ///
    /// The pool may be smaller than the board; it is repeated whole to cover
    /// all cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotEnoughDice`] if the pool is empty while the
    /// board has cells, the one malformed construction input this layer can
    /// receive.
    pub fn with_pool(pool: Vec<DieFaces>, rows: u8, cols: u8) -> Result<Self, BoardError> {
        let cells = usize::from(rows) * usize::from(cols);
        if pool.is_empty() && cells > 0 {
            return Err(BoardError::NotEnoughDice {
                needed: cells,
                available: 0,
            });
        }
        Ok(Self { rows, cols, pool })
    }

    /// Returns the number of rows of generated boards.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the number of columns of generated boards.
    #[must_use]
    pub const fn cols(&self) -> u8 {
        self.cols
    }

    /// Generates a board from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board identified by `seed`; the same seed always yields
    /// the same placement and the same rolled letters.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = seed.rng();
        let cells = usize::from(self.rows) * usize::from(self.cols);

        let mut faces = pool::pool_for_cells(&self.pool, cells);
        faces.shuffle(&mut rng);
        faces.truncate(cells);

        let mut board = Board::new(&faces, self.rows, self.cols)
            .expect("repeated pool covers the cell count");
        board.roll_all(&mut rng);
        GeneratedBoard { board, seed }
    }
}

#[cfg(test)]
mod tests {
    use lexlace_core::Letter;
    use proptest::prelude::*;

    use super::*;
    use crate::pool::CLASSIC_POOL;

    #[test]
    fn test_same_seed_reproduces_the_board() {
        let generator = BoardGenerator::classic();
        let seed = BoardSeed::from_phrase("reproducible");

        let a = generator.generate_with_seed(seed);
        let b = generator.generate_with_seed(seed);
        assert_eq!(a, b);

        let letters_a: Vec<Letter> = (0..25).map(|i| a.board.die(i).current()).collect();
        let letters_b: Vec<Letter> = (0..25).map(|i| b.board.die(i).current()).collect();
        assert_eq!(letters_a, letters_b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let generator = BoardGenerator::classic();
        let a = generator.generate_with_seed(BoardSeed::from_phrase("first"));
        let b = generator.generate_with_seed(BoardSeed::from_phrase("second"));
        assert_ne!(a.board, b.board);
    }

    #[test]
    fn test_classic_board_reuses_the_sixteen_sets() {
        let generator = BoardGenerator::classic();
        let generated = generator.generate_with_seed(BoardSeed::from_phrase("pool check"));

        // 25 cells drawn from the pool doubled: each face-set appears at most
        // twice, and every placed set is a classic one.
        for i in 0..25 {
            let faces = generated.board.die(i).faces();
            assert!(CLASSIC_POOL.contains(faces));
            let copies = (0..25)
                .filter(|&j| generated.board.die(j).faces() == faces)
                .count();
            assert!(copies <= 2, "face-set placed {copies} times");
        }
    }

    #[test]
    fn test_rolled_letters_come_from_the_faces() {
        let generator = BoardGenerator::new(3, 4);
        let generated = generator.generate_with_seed(BoardSeed::from_phrase("faces"));
        for i in 0..generated.board.cell_count() {
            let die = generated.board.die(i);
            assert!(die.faces().faces().contains(&die.current()));
        }
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let err = BoardGenerator::with_pool(Vec::new(), 5, 5).unwrap_err();
        assert_eq!(
            err,
            BoardError::NotEnoughDice {
                needed: 25,
                available: 0,
            }
        );
    }

    #[test]
    fn test_small_custom_pool_covers_the_board() {
        let pool = vec![DieFaces::from_ascii(b"AAEEGN"), DieFaces::from_ascii(b"ELRTTY")];
        let generator = BoardGenerator::with_pool(pool, 4, 4).unwrap();
        let generated = generator.generate_with_seed(BoardSeed::from_phrase("small pool"));
        assert_eq!(generated.board.cell_count(), 16);
    }

    #[test]
    fn test_zero_cell_board_generates() {
        let generator = BoardGenerator::with_pool(Vec::new(), 0, 0).unwrap();
        let generated = generator.generate_with_seed(BoardSeed::from_phrase("empty"));
        assert_eq!(generated.board.cell_count(), 0);
    }

    proptest! {
        #[test]
        fn prop_any_seed_fills_the_board(rows in 0u8..7, cols in 0u8..7, phrase in ".{0,32}") {
            let generator = BoardGenerator::new(rows, cols);
            let generated = generator.generate_with_seed(BoardSeed::from_phrase(&phrase));
            prop_assert_eq!(
                generated.board.cell_count(),
                usize::from(rows) * usize::from(cols),
            );
            for i in 0..generated.board.cell_count() {
                prop_assert!(CLASSIC_POOL.contains(generated.board.die(i).faces()));
            }
        }
    }
}
