//! Seeded word-dice board generation.
//!
//! This crate is the system's random-assignment layer: it shuffles a die pool
//! onto board positions and rolls every die, all driven by an explicit
//! [`BoardSeed`] so that any board can be reproduced from 64 hex characters.
//!
//! - [`pool`]: the canonical sixteen-die pool and pool repetition
//! - [`seed`]: [`BoardSeed`] creation, hashing, and text round-tripping
//! - [`generator`]: [`BoardGenerator`] producing [`GeneratedBoard`]s
//!
//! # Examples
//!
//! ```
//! use lexlace_generator::{BoardGenerator, BoardSeed};
//!
//! let generator = BoardGenerator::classic();
//! let generated = generator.generate_with_seed(BoardSeed::from_phrase("demo"));
//!
//! println!("{}", generated.board);
//! println!("seed: {}", generated.seed);
//! ```

pub mod generator;
pub mod pool;
pub mod seed;

pub use self::{
    generator::{BoardGenerator, GeneratedBoard},
    seed::{BoardSeed, ParseSeedError},
};
