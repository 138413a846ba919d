//! Word-dice game sessions.
//!
//! Glues the core, generator, and solver crates into a round-oriented
//! [`Game`]: index a dictionary once, then roll seeded boards and solve each
//! one synchronously, exposing the sorted solution list for a presentation
//! layer to render. Timers, rendering, and input handling live outside this
//! crate.
//!
//! # Examples
//!
//! ```
//! use lexlace_game::Game;
//! use lexlace_generator::BoardGenerator;
//!
//! let mut game = Game::new(["stone", "tones"], BoardGenerator::classic());
//! let found = game.new_round().solutions().len();
//! assert!(found <= game.trie().word_count());
//! ```

pub mod game;

pub use self::game::{Game, Round};
