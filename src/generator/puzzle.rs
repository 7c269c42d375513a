/*
puzzle.rs

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

//! A grid and its targets, ready to be played.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::combinations;
use super::difficulty::Difficulty;
use super::grid::GridGenerator;
use super::targets;
use super::tile::Grid;

/// Number of complete puzzle generations (grid and targets) before giving up.
pub const MAX_SETUP_ATTEMPTS: usize = 10;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PuzzleError {
    /// No grid gave enough targets.
    GenerationExhausted { attempts: usize },

    /// The puzzle has no target to play.
    NoTargets,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PuzzleError::GenerationExhausted { attempts } => write!(
                f,
                "Could not generate a puzzle with enough targets after {attempts} attempts"
            ),
            PuzzleError::NoTargets => write!(f, "The puzzle has no targets"),
        }
    }
}

impl Error for PuzzleError {}

/// Puzzle object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub difficulty: Difficulty,
    pub grid: Grid,

    /// One target per round.
    pub targets: Vec<i32>,
}

impl Puzzle {
    /// Generate a puzzle with at least `required_targets` targets.
    ///
    /// Grids that do not give enough targets are discarded, up to [`MAX_SETUP_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// The method returns an error when no attempt gave enough targets.
    pub fn generate<R: Rng + ?Sized>(
        difficulty: Difficulty,
        required_targets: usize,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let config = difficulty.config();
        let mut generator: GridGenerator = GridGenerator::new(config);

        for attempt in 1..=MAX_SETUP_ATTEMPTS {
            let grid: Grid = generator.generate(rng);
            let combos = combinations::get_all_combinations(&grid, config);
            let targets: Vec<i32> = targets::generate_targets(&combos, config.total_rounds, rng);

            if !targets.is_empty() && targets.len() >= required_targets {
                debug!(
                    "Puzzle generated after {attempt} attempt(s), {} grid(s) for the last one",
                    generator.attempts
                );
                return Ok(Self {
                    difficulty,
                    grid,
                    targets,
                });
            }
            warn!(
                "Attempt {attempt}: {} targets, {required_targets} required, retrying",
                targets.len()
            );
        }
        Err(PuzzleError::GenerationExhausted {
            attempts: MAX_SETUP_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn puzzle_has_one_target_per_round() {
        let mut rng = StdRng::seed_from_u64(2025);
        for d in Difficulty::ALL {
            let config = d.config();
            let puzzle = Puzzle::generate(d, config.total_rounds, &mut rng).unwrap();
            assert_eq!(puzzle.targets.len(), config.total_rounds);
            let combos = combinations::get_all_combinations(&puzzle.grid, config);
            for t in &puzzle.targets {
                assert!(config.target_range.contains(*t));
                assert!(combos.iter().any(|c| c.result == *t));
            }
        }
    }

    #[test]
    fn impossible_requirement_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let ret = Puzzle::generate(Difficulty::Easy, usize::MAX, &mut rng);
        assert_eq!(
            ret,
            Err(PuzzleError::GenerationExhausted {
                attempts: MAX_SETUP_ATTEMPTS
            })
        );
    }

    #[test]
    fn puzzle_serializes_to_json() {
        let mut rng = StdRng::seed_from_u64(4);
        let puzzle = Puzzle::generate(Difficulty::Easy, 1, &mut rng).unwrap();
        let json = serde_json::to_string(&puzzle).unwrap();
        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, puzzle);
    }
}
