//! Core data structures for word-dice puzzles.
//!
//! This crate provides the fundamental types shared by the board generation,
//! solving, and game session crates:
//!
//! 1. **Alphabet and coordinates**
//!    - [`letter`]: type-safe [`Letter`] (`A`-`Z`) with case normalization
//!    - [`position`]: board [`Position`] (x, y) coordinates
//!
//! 2. **Dice and the board**
//!    - [`die`]: six-faced letter dice ([`DieFaces`], [`Die`])
//!    - [`board`]: the [`Board`] grid with its precomputed, symmetric
//!      8-direction adjacency graph
//!
//! 3. **Dictionary index**
//!    - [`trie`]: the [`Trie`] prefix tree used to prune board searches and
//!      answer exact-word queries
//!
//! # Examples
//!
//! ```
//! use lexlace_core::{Board, DieFaces, Position, Trie};
//!
//! let trie = Trie::from_words(["gears", "gear"]);
//! assert!(trie.contains_word("gear"));
//!
//! let faces = vec![DieFaces::from_ascii(b"AAEEGN"); 25];
//! let board = Board::new(&faces, 5, 5)?;
//! assert_eq!(board.die_at(Position::new(0, 0)).current().to_char(), 'A');
//! # Ok::<(), lexlace_core::BoardError>(())
//! ```

pub mod board;
pub mod die;
pub mod letter;
pub mod position;
pub mod trie;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError},
    die::{Die, DieFaces},
    letter::Letter,
    position::Position,
    trie::{MIN_WORD_LENGTH, Trie, TrieNode},
};
