/*
generator.rs

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

//! Generate puzzles: grids of numbers and the targets to reach.
//!
//! [`difficulty::Difficulty`] selects a static [`difficulty::DifficultyConfig`] object that
//! gives the grid size, the length of the solution paths, and the operators.
//!
//! A puzzle is built in three steps:
//!
//! * A random [`tile::Grid`] is created by a [`grid::GridGenerator`] object.
//!   The grid is accepted only if it offers enough solutions for all the rounds.
//!   If it takes too many attempts, then the last grid is used anyway.
//!
//! * [`combinations::get_all_combinations`] lists all the runs of tiles, with all the operator
//!   assignments, whose result is a possible target.
//!   The [`calculator`] module evaluates the runs from left to right.
//!
//! * [`targets::generate_targets`] picks one target per round from these combinations.
//!
//! [`puzzle::Puzzle::generate`] runs these steps, and starts over with a new grid, a bounded
//! number of times, when the targets are missing.
//!
//! The [`path`] module validates the straight-line paths that the player selects.

pub mod calculator;
pub mod combinations;
pub mod difficulty;
pub mod grid;
pub mod operator;
pub mod path;
pub mod puzzle;
pub mod targets;
pub mod tile;
