//! Example demonstrating a full game round from the command line.
//!
//! This example shows how to:
//! - Load a word list file (one word per line) and index it
//! - Generate a rolled board, randomly or from a seed
//! - Solve the board and print every findable word
//! - Sample many random boards in parallel and keep the wordiest one
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_board -- --words /usr/share/dict/words
//! ```
//!
//! Reproduce a specific board from its seed:
//!
//! ```sh
//! cargo run --example solve_board -- --seed <64-hex-chars>
//! ```
//!
//! Sample 500 boards and print the one with the most words:
//!
//! ```sh
//! cargo run --example solve_board -- --sample 500
//! ```

use std::{fs, path::PathBuf, process, str::FromStr as _};

use clap::Parser;
use lexlace_core::Board;
use lexlace_game::Game;
use lexlace_generator::{BoardGenerator, BoardSeed, GeneratedBoard};
use lexlace_solver::{WordList, WordSearch};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Word list file, one word per line.
    #[arg(long, value_name = "FILE", default_value = "/usr/share/dict/words")]
    words: PathBuf,

    /// Board rows.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    rows: u8,

    /// Board columns.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    cols: u8,

    /// Seed (64 hex characters) reproducing a specific board.
    #[arg(long, value_name = "SEED", conflicts_with = "sample")]
    seed: Option<String>,

    /// Sample this many random boards and keep the one with the most words.
    #[arg(long, value_name = "COUNT")]
    sample: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let words = match fs::read_to_string(&args.words) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("cannot read {}: {err}", args.words.display());
            process::exit(1);
        }
    };

    let generator = BoardGenerator::new(args.rows, args.cols);
    let mut game = Game::new(words.lines(), generator);

    if let Some(count) = args.sample {
        if count == 0 {
            eprintln!("--sample must be at least 1.");
            process::exit(1);
        }
        let search = WordSearch::new(game.trie());
        let best = (0..count)
            .into_par_iter()
            .map(|_| {
                let generated = game.generator().generate();
                let found = search.solve(&generated.board);
                (generated, found)
            })
            .max_by_key(|(_, found)| found.len());
        if let Some((GeneratedBoard { board, seed }, found)) = best {
            print_round(&board, seed, &found, Some(count));
        }
        return;
    }

    let round = match &args.seed {
        Some(text) => match BoardSeed::from_str(text) {
            Ok(seed) => game.new_round_with_seed(seed),
            Err(err) => {
                eprintln!("invalid seed: {err}");
                process::exit(2);
            }
        },
        None => game.new_round(),
    };
    print_round(round.board(), round.seed(), round.solutions(), None);
}

fn print_round(board: &Board, seed: BoardSeed, found: &WordList, sampled: Option<usize>) {
    println!("Seed:");
    println!("  {seed}");
    println!();

    if let Some(count) = sampled {
        println!("Selection:");
        println!("  Boards sampled: {count}");
        println!();
    }

    println!("Board:");
    for line in board.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Words ({}):", found.len());
    for word in found {
        println!("  {word}");
    }
}
