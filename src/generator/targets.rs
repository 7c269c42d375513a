/*
targets.rs

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

//! Select the target numbers of a game.
//!
//! Combinations that mix operators (`3 + 4 * 2`) make better targets than combinations that
//! repeat the same operator (`3 + 4 + 2`), so they are used first.
//! Only the result of the selected combinations is kept: the player can reach a target with any
//! path that gives the same number.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use super::combinations::GameCombination;

/// Select `total_rounds` targets from the combinations.
///
/// Return an empty list when there are no combinations. The caller must then generate another
/// grid. The list is shorter than `total_rounds` when there are fewer combinations than rounds.
pub fn generate_targets<R: Rng + ?Sized>(
    combinations: &[GameCombination],
    total_rounds: usize,
    rng: &mut R,
) -> Vec<i32> {
    if combinations.is_empty() {
        warn!("No valid combinations found, a new grid is required");
        return Vec::new();
    }

    let mut mixed: Vec<&GameCombination> = combinations.iter().filter(|c| c.is_mixed()).collect();
    let mut same: Vec<&GameCombination> = combinations.iter().filter(|c| !c.is_mixed()).collect();

    // Mixed operators first
    mixed.shuffle(rng);
    let mut selected: Vec<&GameCombination> = mixed.into_iter().take(total_rounds).collect();

    // Then the same operators
    if selected.len() < total_rounds {
        let remaining: usize = total_rounds - selected.len();
        same.shuffle(rng);
        selected.extend(same.into_iter().take(remaining));
    }

    // Then anything not selected yet
    if selected.len() < total_rounds {
        let mut others: Vec<&GameCombination> = combinations
            .iter()
            .filter(|c| !selected.iter().any(|s| s.same_solution(c)))
            .collect();
        others.shuffle(rng);
        let remaining: usize = total_rounds - selected.len();
        selected.extend(others.into_iter().take(remaining));
    }

    let mut targets: Vec<i32> = selected.iter().map(|c| c.result).collect();
    targets.shuffle(rng);
    debug!(
        "Targets {:?} selected from {} combinations",
        targets,
        combinations.len()
    );
    targets
}
