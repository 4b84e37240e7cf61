//! Benchmarks for the crossword engine.
//!
//! # Benchmarks
//!
//! - **`is_complete`**: Full-grid completion check, on a blank grid (fails on
//!   the first clue) and on a solved grid (walks every span).
//! - **`check_word`**: Word check for the selected cell on a solved grid.
//! - **`enter_word`**: Selecting a cell and typing a whole answer.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench engine
//! ```

use std::{hint, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use heartword_core::{LetterGrid, Position};
use heartword_game::Game;
use heartword_puzzle::Puzzle;

fn bench_is_complete(c: &mut Criterion) {
    let puzzle = Puzzle::keepsake();
    let cases = [
        ("blank", LetterGrid::new(puzzle.size())),
        ("solved", puzzle.solution().clone()),
    ];

    for (name, filled) in cases {
        let game = Game::from_filled(puzzle.clone(), filled).unwrap();
        c.bench_with_input(BenchmarkId::new("is_complete", name), &game, |b, game| {
            b.iter(|| hint::black_box(game).is_complete());
        });
    }
}

fn bench_check_word(c: &mut Criterion) {
    let puzzle = Puzzle::keepsake();
    let mut game = Game::from_filled(puzzle.clone(), puzzle.solution().clone()).unwrap();
    game.select_cell(Position::new(8, 6));

    c.bench_function("check_word", |b| {
        b.iter(|| hint::black_box(&game).check_word());
    });
}

fn bench_enter_word(c: &mut Criterion) {
    let puzzle = Puzzle::keepsake();
    let clue = puzzle.clues()[14].clone();

    c.bench_function("enter_word", |b| {
        b.iter_batched(
            || Game::new(puzzle.clone()),
            |mut game| {
                game.select_cell(clue.origin());
                for &letter in clue.answer() {
                    game.enter_letter(letter);
                }
                game
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets =
        bench_is_complete,
        bench_check_word,
        bench_enter_word
);
criterion_main!(benches);
