/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Grid Genius.

Grid Genius is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Grid Genius is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Grid Genius. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! These options are intended for developers tuning the difficulty levels.
//! Grid Genius can generate puzzles and print them with their targets, and optionally with a
//! solution for each target.
//!
//! # Examples
//!
//! List the difficulty levels:
//!
//! ```
//! $ gridgenius --ls
//! 0 Easy: 3x3 grid, 2 tiles, operators + -, targets 1..=20, 5 rounds, score x1
//! 1 Medium: 4x4 grid, 3 tiles, operators + - *, targets 1..=35, 5 rounds, score x1.5
//! 2 Hard: 4x4 grid, 3 tiles, operators + - *, targets 1..=50, 5 rounds, score x2
//! ```
//!
//! Generate two easy puzzles, with a solution for each target:
//!
//! ```
//! $ gridgenius -c 2 -f easy --hints
//! 4 9 1
//! 7 2 2
//! 5 8 6
//! targets: [13, 6, 2, 9, 11]
//!   13 = 4 + 9
//!   ...
//! ```

use clap::Parser;
use log::debug;
use rand::rngs::ThreadRng;
use std::env;

use gridgenius::generator::combinations::{self, GameCombination};
use gridgenius::generator::difficulty::{Difficulty, DifficultyConfig};
use gridgenius::generator::grid::GridGenerator;
use gridgenius::generator::puzzle::{MAX_SETUP_ATTEMPTS, Puzzle};
use gridgenius::generator::targets;
use gridgenius::generator::tile::Grid;

const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>";

/// Build random Grid Genius puzzles for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the difficulty levels
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Difficulty level of the puzzles
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the puzzles in JSON format
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print a solution for each target
    #[arg(long, default_value_t = false)]
    hints: bool,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Return the description of a difficulty level.
fn describe(difficulty: Difficulty) -> String {
    let config: &DifficultyConfig = difficulty.config();
    let operators: Vec<String> = config
        .available_operators
        .iter()
        .map(|o| o.to_string())
        .collect();
    format!(
        "{} {difficulty}: {}x{} grid, {} tiles, operators {}, targets {}..={}, {} rounds, score x{}",
        difficulty as i32,
        config.grid_size,
        config.grid_size,
        config.tiles_count,
        operators.join(" "),
        config.target_range.min,
        config.target_range.max,
        config.total_rounds,
        config.score_multiplier
    )
}

/// Print a puzzle in text format.
fn print_puzzle(puzzle: &Puzzle, hints: bool) {
    print!("{}", puzzle.grid);
    println!("targets: {:?}", puzzle.targets);
    if hints {
        let config: &DifficultyConfig = puzzle.difficulty.config();
        for target in &puzzle.targets {
            match combinations::find_hint(&puzzle.grid, config, *target) {
                Some(c) => println!(
                    "  {target} = {} ({} solutions)",
                    c.calculation(),
                    combinations::count_solutions(&puzzle.grid, config, *target)
                ),
                None => println!("  {target}: no solution"),
            }
        }
    }
    println!();
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the difficulty levels
    //
    if args.ls {
        (0..)
            .map_while(Difficulty::from_repr)
            .for_each(|d| println!("{}", describe(d)));
        return 0;
    }

    let config: &'static DifficultyConfig = args.difficulty.config();
    let mut rng: ThreadRng = rand::rng();
    let mut generator: GridGenerator = GridGenerator::new(config);

    let mut puzzles: Vec<Puzzle> = Vec::with_capacity(args.count);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut grids: usize = 0;
    let mut fallbacks: usize = 0;
    let mut errors: usize = 0;
    let mut consecutive_errors: usize = 0;
    while puzzles.len() < args.count {
        debug!("Puzzle {}", puzzles.len());

        let grid: Grid = generator.generate(&mut rng);
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        grids += generator.attempts;
        if generator.fallback {
            fallbacks += 1;
        }

        let combos: Vec<GameCombination> = combinations::get_all_combinations(&grid, config);
        let targets: Vec<i32> = targets::generate_targets(&combos, config.total_rounds, &mut rng);
        if targets.len() < config.total_rounds {
            // Not enough targets for a classic game, try another grid
            errors += 1;
            consecutive_errors += 1;
            debug!("ERROR only {} targets", targets.len());
            if consecutive_errors >= MAX_SETUP_ATTEMPTS {
                eprintln!(
                    "Could not generate a {} puzzle after {MAX_SETUP_ATTEMPTS} attempts",
                    args.difficulty
                );
                return 1;
            }
            continue;
        }
        consecutive_errors = 0;
        puzzles.push(Puzzle {
            difficulty: args.difficulty,
            grid,
            targets,
        });
    }

    if args.json {
        match serde_json::to_string_pretty(&puzzles) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize the puzzles: {e}");
                return 1;
            }
        }
    } else {
        for p in &puzzles {
            print_puzzle(p, args.hints);
        }
    }

    // Print some stats
    if args.summary && args.count > 0 {
        println!(
            "
      total time = {}s
    average time = {}s
        max time = {}s
average attempts = {}
       fallbacks = {}
          errors = {}",
            total,
            total / args.count as f32,
            max,
            grids as f32 / args.count as f32,
            fallbacks,
            errors
        );
    }
    0
}
