//! The solved-word result collection.

use std::collections::BTreeSet;

/// The words found on one board: unique, uppercase, sorted ascending.
///
/// This is the solver's sole output. The same word reached along several
/// distinct cell paths appears once.
///
/// # Examples
///
/// ```
/// use lexlace_solver::WordList;
///
/// let list = WordList::default();
/// assert!(list.is_empty());
/// assert!(!list.contains("STONE"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Creates an empty word list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_set(words: BTreeSet<String>) -> Self {
        // BTreeSet iteration is already ascending and duplicate-free.
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Returns the number of words found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no words were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` (uppercase) is in the list.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    /// Returns the words as a sorted slice.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns an iterator over the words in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }
}

impl IntoIterator for WordList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
