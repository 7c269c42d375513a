/*
difficulty.rs

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

//! Difficulty levels and their static configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::operator::Operator;

/// Smallest tile value.
pub const MIN_NUMBER: i32 = 1;

/// Largest tile value.
pub const MAX_NUMBER: i32 = 9;

/// Inclusive range of the target numbers.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct TargetRange {
    pub min: i32,
    pub max: i32,
}

impl TargetRange {
    /// Whether the given value is in the range.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Parameters of a difficulty level.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DifficultyConfig {
    /// Number of rows and columns of the grid.
    pub grid_size: usize,

    /// Number of tiles in a solution path.
    pub tiles_count: usize,

    /// Number of operators in a solution path. Always `tiles_count - 1`.
    pub operators_count: usize,

    /// Operators that the player can use.
    pub available_operators: &'static [Operator],

    /// Targets are selected in that range.
    pub target_range: TargetRange,

    /// Number of rounds in a classic game.
    pub total_rounds: usize,

    /// Score multiplier applied to a correct answer.
    pub score_multiplier: f32,
}

const EASY: DifficultyConfig = DifficultyConfig {
    grid_size: 3,
    tiles_count: 2,
    operators_count: 1,
    available_operators: &[Operator::Add, Operator::Subtract],
    target_range: TargetRange { min: 1, max: 20 },
    total_rounds: 5,
    score_multiplier: 1.0,
};

const MEDIUM: DifficultyConfig = DifficultyConfig {
    grid_size: 4,
    tiles_count: 3,
    operators_count: 2,
    available_operators: &[Operator::Add, Operator::Subtract, Operator::Multiply],
    target_range: TargetRange { min: 1, max: 35 },
    total_rounds: 5,
    score_multiplier: 1.5,
};

const HARD: DifficultyConfig = DifficultyConfig {
    grid_size: 4,
    tiles_count: 3,
    operators_count: 2,
    available_operators: &[Operator::Add, Operator::Subtract, Operator::Multiply],
    target_range: TargetRange { min: 1, max: 50 },
    total_rounds: 5,
    score_multiplier: 2.0,
};

/// Difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// All the levels, from the easiest.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Return the static configuration of the level.
    pub fn config(&self) -> &'static DifficultyConfig {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }
}

/// Game modes.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum GameMode {
    /// A fixed number of rounds at the player's pace.
    #[default]
    Classic,

    /// As many rounds as possible before the countdown ends.
    TimeAttack,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameMode::Classic => write!(f, "Classic"),
            GameMode::TimeAttack => write!(f, "Time Attack"),
        }
    }
}
