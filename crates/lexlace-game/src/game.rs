//! Game session management.

use lexlace_core::{Board, Trie};
use lexlace_generator::{BoardGenerator, BoardSeed, GeneratedBoard};
use lexlace_solver::{WordList, WordSearch};

/// One played round: a rolled board together with its complete solution list.
///
/// The solutions are computed when the round starts, immediately after the
/// roll, so the board's letters and the word list always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    generated: GeneratedBoard,
    solutions: WordList,
}

impl Round {
    /// Returns the rolled board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.generated.board
    }

    /// Returns the seed that reproduces this round's board.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.generated.seed
    }

    /// Returns every dictionary word findable on this board, uppercase and
    /// sorted ascending.
    #[must_use]
    pub fn solutions(&self) -> &WordList {
        &self.solutions
    }
}

/// A word-dice game session.
///
/// Owns the dictionary index (built once, read-only afterwards) and a board
/// generator, and plays rounds: each round rolls a fresh board and solves it
/// synchronously before play begins. Re-rolling always goes through
/// [`new_round`](Self::new_round), which replaces the previous round whole,
/// so a board is never mutated while its solutions are live.
///
/// # Examples
///
/// ```
/// use lexlace_game::Game;
/// use lexlace_generator::{BoardGenerator, BoardSeed};
///
/// let mut game = Game::new(["stone", "stones", "tone"], BoardGenerator::classic());
/// let round = game.new_round_with_seed(BoardSeed::from_phrase("doc"));
///
/// println!("{}", round.board());
/// for word in round.solutions() {
///     println!("{word}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    trie: Trie,
    generator: BoardGenerator,
    round: Option<Round>,
}

impl Game {
    /// Creates a session, indexing the word sequence once.
    ///
    /// Words are filtered and normalized by
    /// [`Trie::from_words`]; where they come from is the caller's concern.
    /// No round is active until the first [`new_round`](Self::new_round).
    #[must_use]
    pub fn new<I, S>(words: I, generator: BoardGenerator) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trie = Trie::from_words(words);
        log::debug!("dictionary indexed: {} words", trie.word_count());
        Self {
            trie,
            generator,
            round: None,
        }
    }

    /// Returns the dictionary index.
    #[must_use]
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Returns the board generator.
    #[must_use]
    pub fn generator(&self) -> &BoardGenerator {
        &self.generator
    }

    /// Returns the round in progress, if any.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Starts a round from a fresh random seed: rolls a new board, solves it,
    /// and replaces any previous round.
    pub fn new_round(&mut self) -> &Round {
        let generated = self.generator.generate();
        self.play(generated)
    }

    /// Starts the round identified by `seed`, reproducibly.
    pub fn new_round_with_seed(&mut self, seed: BoardSeed) -> &Round {
        let generated = self.generator.generate_with_seed(seed);
        self.play(generated)
    }

    fn play(&mut self, generated: GeneratedBoard) -> &Round {
        let solutions = WordSearch::new(&self.trie).solve(&generated.board);
        log::debug!(
            "round {}: {} words on the board",
            generated.seed,
            solutions.len()
        );
        self.round.insert(Round {
            generated,
            solutions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "stone", "stones", "tone", "tones", "nest", "rest", "rents", "least", "steal", "slate",
        "tales", "onset",
    ];

    #[test]
    fn test_no_round_until_first_roll() {
        let game = Game::new(WORDS, BoardGenerator::classic());
        assert!(game.round().is_none());
        assert_eq!(game.trie().word_count(), WORDS.len());
    }

    #[test]
    fn test_seeded_rounds_are_reproducible() {
        let seed = BoardSeed::from_phrase("repro round");
        let mut a = Game::new(WORDS, BoardGenerator::classic());
        let mut b = Game::new(WORDS, BoardGenerator::classic());

        let round_a = a.new_round_with_seed(seed).clone();
        let round_b = b.new_round_with_seed(seed).clone();
        assert_eq!(round_a, round_b);
        assert_eq!(round_a.seed(), seed);
    }

    #[test]
    fn test_new_round_replaces_the_previous_one() {
        let mut game = Game::new(WORDS, BoardGenerator::classic());
        let first_seed = game.new_round_with_seed(BoardSeed::from_phrase("one")).seed();
        let second_seed = game.new_round_with_seed(BoardSeed::from_phrase("two")).seed();
        assert_ne!(first_seed, second_seed);
        assert_eq!(game.round().unwrap().seed(), second_seed);
    }

    #[test]
    fn test_solutions_are_indexed_words() {
        let mut game = Game::new(WORDS, BoardGenerator::classic());
        let round = game.new_round_with_seed(BoardSeed::from_phrase("membership")).clone();
        for word in round.solutions() {
            // contains_word normalizes case, so uppercase results match.
            assert!(game.trie().contains_word(word));
            assert!(word.len() > lexlace_core::MIN_WORD_LENGTH);
        }
    }

    #[test]
    fn test_empty_dictionary_round_has_no_solutions() {
        let mut game = Game::new(std::iter::empty::<&str>(), BoardGenerator::classic());
        let round = game.new_round_with_seed(BoardSeed::from_phrase("empty dict"));
        assert!(round.solutions().is_empty());
    }
}
