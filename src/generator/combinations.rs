/*
combinations.rs

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

//! Enumerate every solution that a grid offers.
//!
//! A combination is a run of adjacent tiles on a row or a column, an assignment of operators
//! between these tiles, and the result of the calculation.
//! [`all_combinations`] is the only exhaustive search: counting solutions, selecting targets,
//! and looking for a hint all rely on it.
//!
//! The enumeration order is stable: horizontal runs row by row, then vertical runs row by row,
//! and for each run the operator assignments in the order of the available operators.

use log::debug;
use serde::{Deserialize, Serialize};

use super::calculator;
use super::difficulty::DifficultyConfig;
use super::operator::Operator;
use super::tile::{Grid, Tile};

/// A run of tiles with its operators and result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameCombination {
    pub tiles: Vec<Tile>,
    pub operators: Vec<Operator>,
    pub result: i32,
}

impl GameCombination {
    /// Whether the operators are not all identical. A single operator counts as mixed.
    pub fn is_mixed(&self) -> bool {
        match self.operators.split_first() {
            Some((first, rest)) => rest.is_empty() || rest.iter().any(|op| op != first),
            None => true,
        }
    }

    /// Whether both combinations use the same tiles and give the same result.
    pub fn same_solution(&self, other: &GameCombination) -> bool {
        self.result == other.result
            && self.tiles.len() == other.tiles.len()
            && self.tiles.iter().zip(&other.tiles).all(|(a, b)| a.id == b.id)
    }

    /// Return the calculation string, such as `3 * 4 - 2`.
    pub fn calculation(&self) -> String {
        calculator::format_calculation(&self.tiles, &self.operators)
    }
}

/// Return all the runs of `length` tiles: horizontal runs first, then vertical runs.
pub fn runs(grid: &Grid, length: usize) -> Vec<Vec<Tile>> {
    let size: usize = grid.size();
    let mut ret: Vec<Vec<Tile>> = Vec::new();
    if length == 0 || length > size {
        return ret;
    }

    for row in 0..size {
        for col in 0..=(size - length) {
            let run: Option<Vec<Tile>> =
                (0..length).map(|i| grid.get(row, col + i).copied()).collect();
            if let Some(r) = run {
                ret.push(r);
            }
        }
    }
    for row in 0..=(size - length) {
        for col in 0..size {
            let run: Option<Vec<Tile>> =
                (0..length).map(|i| grid.get(row + i, col).copied()).collect();
            if let Some(r) = run {
                ret.push(r);
            }
        }
    }
    ret
}

/// Return every sequence of `count` operators taken from `available` (with repetition).
pub fn operator_assignments(available: &[Operator], count: usize) -> Vec<Vec<Operator>> {
    let mut ret: Vec<Vec<Operator>> = vec![Vec::with_capacity(count)];
    for _ in 0..count {
        ret = ret
            .iter()
            .flat_map(|prefix| {
                available.iter().map(move |op| {
                    let mut p: Vec<Operator> = prefix.clone();
                    p.push(*op);
                    p
                })
            })
            .collect();
    }
    ret
}

/// Return every combination of the grid, without filtering on the result.
pub fn all_combinations(grid: &Grid, config: &DifficultyConfig) -> Vec<GameCombination> {
    let assignments: Vec<Vec<Operator>> =
        operator_assignments(config.available_operators, config.operators_count);
    let mut ret: Vec<GameCombination> = Vec::new();

    for run in runs(grid, config.tiles_count) {
        for operators in &assignments {
            if let Some(result) = calculator::calculate_path_result(&run, operators) {
                ret.push(GameCombination {
                    tiles: run.clone(),
                    operators: operators.clone(),
                    result,
                });
            }
        }
    }
    ret
}

/// Return the combinations of the grid that give a possible target: a non-negative result in
/// the target range of the difficulty level.
pub fn get_all_combinations(grid: &Grid, config: &DifficultyConfig) -> Vec<GameCombination> {
    let ret: Vec<GameCombination> = all_combinations(grid, config)
        .into_iter()
        .filter(|c| c.result >= 0 && config.target_range.contains(c.result))
        .collect();
    debug!("{} combinations in the target range", ret.len());
    ret
}

/// Whether the grid has enough combinations to play all the rounds.
pub fn has_enough_solutions(grid: &Grid, config: &DifficultyConfig) -> bool {
    get_all_combinations(grid, config).len() >= config.total_rounds
}

/// Return the first combination that gives the target, or None if the grid has no solution for
/// that target.
pub fn find_hint(grid: &Grid, config: &DifficultyConfig, target: i32) -> Option<GameCombination> {
    all_combinations(grid, config)
        .into_iter()
        .find(|c| c.result == target)
}

/// Return the number of combinations that give the target.
pub fn count_solutions(grid: &Grid, config: &DifficultyConfig, target: i32) -> usize {
    all_combinations(grid, config)
        .iter()
        .filter(|c| c.result == target)
        .count()
}
