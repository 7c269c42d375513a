/*
grid.rs

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

//! Generate a random grid.

use log::{debug, warn};
use rand::Rng;
use std::time::Instant;

use super::combinations;
use super::difficulty::{DifficultyConfig, MAX_NUMBER, MIN_NUMBER};
use super::tile::Grid;

/// Default number of grids to try before giving up on the solution count.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Generate a grid of random values, without verifying that it can be solved.
pub fn generate_grid<R: Rng + ?Sized>(config: &DifficultyConfig, rng: &mut R) -> Grid {
    let size: usize = config.grid_size;
    let values: Vec<i32> = (0..size * size)
        .map(|_| rng.random_range(MIN_NUMBER..=MAX_NUMBER))
        .collect();

    // The number of values always matches the grid size
    Grid::from_values(size, &values).unwrap_or_default()
}

/// [`GridGenerator`] object.
pub struct GridGenerator {
    /// Difficulty level parameters.
    pub config: &'static DifficultyConfig,

    /// Maximum number of grids to generate.
    pub max_attempts: usize,

    /// Number of grids generated during the last call to [`GridGenerator::generate`].
    pub attempts: usize,

    /// Number of combinations in the target range for the last returned grid.
    pub solutions: usize,

    /// Whether the last returned grid is a fallback grid, with fewer combinations than rounds.
    pub fallback: bool,

    /// Duration in seconds it took to generate the last grid.
    pub duration: f32,
}

impl GridGenerator {
    /// Create the object.
    pub fn new(config: &'static DifficultyConfig) -> Self {
        Self::with_max_attempts(config, DEFAULT_MAX_ATTEMPTS)
    }

    /// Create the object with a specific number of attempts.
    pub fn with_max_attempts(config: &'static DifficultyConfig, max_attempts: usize) -> Self {
        Self {
            config,
            max_attempts,
            attempts: 0,
            solutions: 0,
            fallback: false,
            duration: 0.0,
        }
    }

    /// Generate and return a grid that has at least as many combinations as the number of rounds.
    ///
    /// At most [`GridGenerator::max_attempts`] grids are generated (at least one).
    /// If none of them has enough combinations, then the last grid is returned anyway and
    /// [`GridGenerator::fallback`] is set.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Grid {
        let start: Instant = Instant::now();
        let max_attempts: usize = self.max_attempts.max(1);
        self.attempts = 0;
        self.fallback = false;

        let mut grid: Grid = Grid::default();
        while self.attempts < max_attempts {
            self.attempts += 1;
            grid = generate_grid(self.config, rng);
            self.solutions = combinations::get_all_combinations(&grid, self.config).len();
            debug!(
                "Attempt {}: {} combinations (required {})",
                self.attempts, self.solutions, self.config.total_rounds
            );
            if self.solutions >= self.config.total_rounds {
                self.duration = start.elapsed().as_secs_f32();
                return grid;
            }
        }

        warn!(
            "Could not generate a valid grid after {} attempts, using the last one",
            self.attempts
        );
        self.fallback = true;
        self.duration = start.elapsed().as_secs_f32();
        grid
    }
}

/// Generate a grid with enough solutions, by trying at most `max_attempts` grids.
pub fn generate_valid_grid<R: Rng + ?Sized>(
    config: &'static DifficultyConfig,
    max_attempts: usize,
    rng: &mut R,
) -> Grid {
    GridGenerator::with_max_attempts(config, max_attempts).generate(rng)
}
