//! Benchmarks for board solving.
//!
//! Measures `WordSearch::solve` over classic 5x5 boards generated from fixed
//! seeds, with a small fixed dictionary, so runs are reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use lexlace_core::Trie;
use lexlace_generator::{BoardGenerator, BoardSeed};
use lexlace_solver::WordSearch;

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const WORDS: &[&str] = &[
    "aeon", "aeons", "agent", "agents", "aside", "asides", "atone", "atones", "chose", "chosen",
    "crate", "crates", "dealt", "diner", "diners", "eaten", "elate", "elates", "enter", "enters",
    "gnome", "grain", "grains", "grant", "grants", "heart", "hearts", "hoist", "hoists", "inset",
    "insets", "irate", "learn", "learns", "least", "linen", "loner", "loners", "medal", "medals",
    "noise", "notes", "onset", "onsets", "opera", "operas", "paste", "pastel", "print", "prints",
    "quest", "quests", "rated", "relate", "relates", "rinse", "rinsed", "roast", "roasts", "salt",
    "salted", "scent", "scents", "sense", "senses", "shore", "shores", "slate", "slates", "snore",
    "snores", "sonar", "steam", "steams", "stone", "stones", "storm", "storms", "tenor", "tenors",
    "tides", "tonal", "toner", "toners", "trade", "trades", "train", "trains", "treat", "treats",
    "unite", "united", "vents", "waste", "wasted", "wrest", "wrests", "yeast", "yeasts",
];

fn bench_solve_classic(c: &mut Criterion) {
    let trie = Trie::from_words(WORDS);
    let search = WordSearch::new(&trie);
    let generator = BoardGenerator::classic();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = BoardSeed::from_str(seed).unwrap();
        let generated = generator.generate_with_seed(seed);
        c.bench_with_input(
            BenchmarkId::new("solve_classic", format!("seed_{i}")),
            &generated.board,
            |b, board| {
                b.iter(|| search.solve(hint::black_box(board)));
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets = bench_solve_classic
);
criterion_main!(benches);
