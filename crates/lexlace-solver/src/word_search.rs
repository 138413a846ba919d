//! Trie-pruned exhaustive search over a board.

use std::collections::BTreeSet;

use lexlace_core::{Board, Trie, TrieNode};
use tinyvec::ArrayVec;

use crate::WordList;

/// Upper bound on candidate cells per step: the focus cell plus 8 neighbors.
const MAX_CANDIDATES: usize = 9;

/// Finds every indexed word spellable by a path of adjacent cells that never
/// reuses a cell.
///
/// The search is a depth-first walk of the board's adjacency graph, pruned by
/// the trie at every step: a branch is abandoned the instant its accumulated
/// prefix extends no indexed word. It runs synchronously on the calling
/// thread; the trie is borrowed read-only for the searcher's lifetime.
///
/// # Examples
///
/// ```
/// use lexlace_core::{Board, DieFaces, Trie};
/// use lexlace_solver::WordSearch;
///
/// // A 2x2 board showing C A / T S; all four cells are mutually adjacent.
/// let faces = [
///     DieFaces::from_ascii(b"CCCCCC"),
///     DieFaces::from_ascii(b"AAAAAA"),
///     DieFaces::from_ascii(b"TTTTTT"),
///     DieFaces::from_ascii(b"SSSSSS"),
/// ];
/// let board = Board::new(&faces, 2, 2)?;
///
/// let trie = Trie::from_words(["cast", "cats", "scat"]);
/// let words = WordSearch::new(&trie).solve(&board);
///
/// assert_eq!(words.words(), ["CAST", "CATS", "SCAT"]);
/// # Ok::<(), lexlace_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordSearch<'a> {
    trie: &'a Trie,
}

impl<'a> WordSearch<'a> {
    /// Creates a searcher over the given dictionary index.
    #[must_use]
    pub const fn new(trie: &'a Trie) -> Self {
        Self { trie }
    }

    /// Solves the board: explores simple adjacent paths from every cell and
    /// returns the unique words found, uppercase and sorted ascending.
    ///
    /// An empty trie or a zero-cell board yields an empty list, not an error.
    /// Given fixed current letters the result is deterministic.
    #[must_use]
    pub fn solve(&self, board: &Board) -> WordList {
        let Some(root) = self.trie.root() else {
            return WordList::new();
        };

        let mut found = BTreeSet::new();
        let mut used = vec![false; board.cell_count()];
        let mut prefix = String::new();
        for start in 0..board.cell_count() {
            explore(board, root, start, &mut prefix, &mut used, &mut found);
            debug_assert!(prefix.is_empty());
        }
        WordList::from_set(found)
    }
}

/// One expansion step of the backtracking search.
///
/// Candidates are the focus cell and its neighbors, minus cells already used
/// on this branch. Every candidate whose current letter is a child of `node`
/// extends the prefix; terminal children record a word. The prefix and
/// used-set are restored before returning, so sibling branches never observe
/// each other's extensions.
fn explore(
    board: &Board,
    node: &TrieNode,
    focus: usize,
    prefix: &mut String,
    used: &mut [bool],
    found: &mut BTreeSet<String>,
) {
    let mut candidates: ArrayVec<[usize; MAX_CANDIDATES]> = ArrayVec::new();
    if !used[focus] {
        candidates.push(focus);
    }
    for &neighbor in board.neighbors_of(focus) {
        if !used[neighbor] {
            candidates.push(neighbor);
        }
    }

    for &cell in candidates.iter() {
        let letter = board.die(cell).current();
        let Some(child) = node.child(letter) else {
            continue;
        };

        prefix.push(letter.to_char());
        if child.is_terminal() && !found.contains(prefix.as_str()) {
            found.insert(prefix.clone());
        }
        used[cell] = true;
        explore(board, child, cell, prefix, used, found);
        used[cell] = false;
        prefix.pop();
    }
}
