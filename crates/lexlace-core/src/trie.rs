//! Prefix-tree dictionary index.

use crate::Letter;

/// Minimum word length for dictionary indexing: only words *strictly longer*
/// than this are indexed, so three-letter words are never found on a board.
pub const MIN_WORD_LENGTH: usize = 3;

/// One node of the prefix tree.
///
/// A node owns at most one child per letter of the alphabet. Its terminal
/// flag is set iff some indexed word's path ends exactly here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    terminal: bool,
    children: [Option<Box<TrieNode>>; Letter::COUNT],
}

impl TrieNode {
    const NO_CHILD: Option<Box<TrieNode>> = None;

    fn new() -> Self {
        Self {
            terminal: false,
            children: [Self::NO_CHILD; Letter::COUNT],
        }
    }

    /// Returns `true` if a complete indexed word ends at this node.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the child node extending the current prefix with `letter`, or
    /// `None` if no indexed word does.
    #[must_use]
    pub fn child(&self, letter: Letter) -> Option<&TrieNode> {
        self.children[letter.index()].as_deref()
    }
}

/// A prefix tree indexing a dictionary for prefix-viability and exact-word
/// queries.
///
/// The tree is built once from the word list and read-only afterwards. Both
/// insertion and lookup normalize case, so uppercase board letters and
/// lowercase dictionary words compare correctly. Words containing characters
/// outside the ASCII alphabet are silently dropped, never indexed as partial
/// words.
///
/// # Examples
///
/// ```
/// use lexlace_core::Trie;
///
/// let trie = Trie::from_words(["stone", "stones", "ore", "TONE"]);
///
/// assert!(trie.contains_word("stone"));
/// assert!(trie.contains_word("STONES"));
/// assert!(trie.contains_word("tone"));
/// // "ore" has only three letters and is filtered out.
/// assert!(!trie.contains_word("ore"));
/// // "ston" is a prefix of an indexed word, not a word itself.
/// assert!(!trie.contains_word("ston"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: Option<Box<TrieNode>>,
    word_count: usize,
}

impl Trie {
    /// Creates an empty trie. Lookups on it always return `false` and a
    /// search over it finds nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie from a word sequence, indexing only words strictly
    /// longer than [`MIN_WORD_LENGTH`].
    ///
    /// This is the only entry point a dictionary source needs; shorter words
    /// are filtered here, not inside [`insert`](Self::insert).
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            let word = word.as_ref();
            if word.chars().count() > MIN_WORD_LENGTH {
                trie.insert(word);
            }
        }
        trie
    }

    /// Inserts a word, descending into (creating if absent) one child per
    /// character and marking the final node terminal.
    ///
    /// Characters outside the ASCII alphabet abandon the word: no terminal is
    /// marked and the word is effectively dropped. Re-inserting a word is
    /// idempotent. No length filtering happens here.
    pub fn insert(&mut self, word: &str) {
        let mut node = self.root.get_or_insert_with(|| Box::new(TrieNode::new()));
        for c in word.chars() {
            let Some(letter) = Letter::from_char(c) else {
                return;
            };
            node = node.children[letter.index()].get_or_insert_with(|| Box::new(TrieNode::new()));
        }
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
    }

    /// Returns `true` iff `word` was indexed exactly (case-insensitive).
    ///
    /// Any missing link, including characters outside the alphabet, yields
    /// `false` rather than an error.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        let Some(mut node) = self.root.as_deref() else {
            return false;
        };
        for c in word.chars() {
            let Some(child) = Letter::from_char(c).and_then(|letter| node.child(letter)) else {
                return false;
            };
            node = child;
        }
        node.is_terminal()
    }

    /// Returns the root node, or `None` if nothing was ever inserted.
    #[must_use]
    pub fn root(&self) -> Option<&TrieNode> {
        self.root.as_deref()
    }

    /// Returns the number of distinct indexed words.
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if no word was ever inserted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
