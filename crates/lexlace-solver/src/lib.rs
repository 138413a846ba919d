//! Exhaustive word-dice board solving.
//!
//! Given a [`Board`](lexlace_core::Board) and a [`Trie`](lexlace_core::Trie),
//! [`WordSearch`] explores every simple path of adjacent cells, pruned by the
//! trie so that only prefixes of indexed words are ever extended, and returns
//! a [`WordList`]: the unique words found, uppercase and sorted ascending.
//!
//! # Examples
//!
//! ```
//! use lexlace_core::{Board, DieFaces, Trie};
//! use lexlace_solver::WordSearch;
//!
//! let faces = [
//!     DieFaces::from_ascii(b"CCCCCC"),
//!     DieFaces::from_ascii(b"AAAAAA"),
//!     DieFaces::from_ascii(b"TTTTTT"),
//!     DieFaces::from_ascii(b"SSSSSS"),
//! ];
//! let board = Board::new(&faces, 2, 2)?;
//! let trie = Trie::from_words(["cats"]);
//!
//! let words = WordSearch::new(&trie).solve(&board);
//! assert!(words.contains("CATS"));
//! # Ok::<(), lexlace_core::BoardError>(())
//! ```

pub mod word_list;
pub mod word_search;

pub use self::{word_list::WordList, word_search::WordSearch};
