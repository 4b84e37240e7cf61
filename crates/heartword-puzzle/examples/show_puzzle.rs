//! Example printing the bundled keepsake puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example show_puzzle
//! ```
//!
//! Print the filled solution instead of the blank grid:
//!
//! ```sh
//! cargo run --example show_puzzle -- --solution
//! ```
//!
//! Limit the clue list to one direction:
//!
//! ```sh
//! cargo run --example show_puzzle -- --direction down
//! ```

use clap::{Parser, ValueEnum};
use heartword_core::{Direction, Position};
use heartword_puzzle::Puzzle;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    Across,
    Down,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Across => Direction::Across,
            DirectionArg::Down => Direction::Down,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Show the expected letters in the grid.
    #[arg(long)]
    solution: bool,

    /// Only list clues running in this direction.
    #[arg(long, value_name = "DIRECTION")]
    direction: Option<DirectionArg>,
}

fn main() {
    let args = Args::parse();
    let puzzle = Puzzle::keepsake();

    for row in 0..puzzle.size() {
        let line: String = (0..puzzle.size())
            .map(|col| {
                let pos = Position::new(row, col);
                if puzzle.is_black(pos) {
                    '#'
                } else if args.solution {
                    puzzle.solution().get(pos).map_or('.', |letter| letter.as_char())
                } else if puzzle.index().is_covered(pos) {
                    '_'
                } else {
                    '.'
                }
            })
            .flat_map(|ch| [ch, ' '])
            .collect();
        println!("{}", line.trim_end());
    }

    let directions = match args.direction {
        Some(direction) => vec![direction.into()],
        None => Direction::ALL.to_vec(),
    };
    for direction in directions {
        println!();
        println!("{}", direction.as_str().to_uppercase());
        for clue in puzzle.clues_in(direction) {
            println!("{:>3}. {}", clue.number(), clue.clue());
        }
    }
}
