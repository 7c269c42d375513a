/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the grid, the targets, and the player selection.
//! The user interface drives it with the player actions and with a periodic [`Game::tick`].
//! Nothing happens in the background: delays, such as showing the result of a calculation before
//! moving to the next round, are left to the caller.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::generator::calculator;
use crate::generator::combinations::{self, GameCombination};
use crate::generator::difficulty::{Difficulty, DifficultyConfig, GameMode};
use crate::generator::operator::{Operator, OperatorInstance};
use crate::generator::path;
use crate::generator::puzzle::{Puzzle, PuzzleError};
use crate::generator::targets;
use crate::generator::tile::{Grid, Tile};
use crate::selection::Selection;

/// Points for a correct answer, before the multipliers.
const BASE_SCORE: f32 = 10.0;

/// Duration of a time attack game.
pub const TIME_ATTACK_DURATION: Duration = Duration::from_secs(60);

/// Number of rounds displayed for a time attack game, which has no round limit.
pub const TIME_ATTACK_ROUNDS: usize = 999;

/// Status of the game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Completed,
    Paused,
}

/// A calculation that the player submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Calculation string, such as `3 + 4`.
    pub calculation: String,

    /// Result of the calculation, or None if it cannot be evaluated.
    pub result: Option<i32>,

    /// Whether the result is the current target.
    pub correct: bool,
}

/// Outcome of a tile or operator selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// The selection did not change.
    Rejected,

    /// The selection changed but is not complete.
    Accepted,

    /// The selection is complete and has been submitted.
    Completed(Submission),
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    difficulty: Difficulty,
    mode: GameMode,
    config: &'static DifficultyConfig,

    /// Current grid.
    pub grid: Grid,

    /// Targets of the classic rounds.
    targets: Vec<i32>,

    current_target: i32,

    /// Current round, starting at 1.
    current_round: usize,

    total_rounds: usize,
    score: u32,
    status: GameStatus,

    /// Whether the player found the target of the current round.
    round_solved: bool,

    /// Tiles and operators selected by the player.
    selection: Selection,

    /// Playing time, without the pauses.
    elapsed: Duration,

    /// Remaining time for time attack games.
    time_left: Option<Duration>,

    /// Number of rounds solved during a time attack game.
    rounds_completed: usize,
}

impl Game {
    /// Create a [`Game`] object and generate its puzzle.
    ///
    /// # Errors
    ///
    /// The method returns an error if no grid with enough targets could be generated.
    pub fn new<R: Rng + ?Sized>(
        difficulty: Difficulty,
        mode: GameMode,
        rng: &mut R,
    ) -> Result<Self, PuzzleError> {
        let config: &'static DifficultyConfig = difficulty.config();
        let required: usize = match mode {
            GameMode::Classic => config.total_rounds,
            GameMode::TimeAttack => 1,
        };
        let puzzle: Puzzle = Puzzle::generate(difficulty, required, rng)?;
        Self::from_puzzle(puzzle, mode)
    }

    /// Create a [`Game`] object for an existing puzzle.
    ///
    /// # Errors
    ///
    /// The method returns [`PuzzleError::NoTargets`] if the puzzle has no target.
    pub fn from_puzzle(puzzle: Puzzle, mode: GameMode) -> Result<Self, PuzzleError> {
        let current_target: i32 = match puzzle.targets.first() {
            Some(t) => *t,
            None => return Err(PuzzleError::NoTargets),
        };
        let config: &'static DifficultyConfig = puzzle.difficulty.config();
        let (total_rounds, time_left) = match mode {
            GameMode::Classic => (puzzle.targets.len(), None),
            GameMode::TimeAttack => (TIME_ATTACK_ROUNDS, Some(TIME_ATTACK_DURATION)),
        };
        let mut grid: Grid = puzzle.grid;
        grid.clear_selected();

        info!(
            "New {} game, {} mode, targets {:?}",
            puzzle.difficulty, mode, puzzle.targets
        );
        Ok(Self {
            difficulty: puzzle.difficulty,
            mode,
            config,
            grid,
            current_target,
            targets: puzzle.targets,
            current_round: 1,
            total_rounds,
            score: 0,
            status: GameStatus::Playing,
            round_solved: false,
            selection: Selection::new(config),
            elapsed: Duration::ZERO,
            time_left,
            rounds_completed: 0,
        })
    }

    /// Start a new game with the same difficulty level and mode.
    ///
    /// # Errors
    ///
    /// The method returns an error if no grid with enough targets could be generated. The game
    /// is not modified in that case.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PuzzleError> {
        *self = Self::new(self.difficulty, self.mode, rng)?;
        Ok(())
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn current_target(&self) -> i32 {
        self.current_target
    }

    pub fn current_round(&self) -> usize {
        self.current_round
    }

    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the player found the target of the current round.
    pub fn is_round_solved(&self) -> bool {
        self.round_solved
    }

    /// Return the player selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Return the playing time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Return the playing time in hours, minutes, and seconds.
    pub fn elapsed_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.elapsed.as_secs();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }

    /// Return the remaining time of a time attack game.
    pub fn time_left(&self) -> Option<Duration> {
        self.time_left
    }

    /// Return the number of rounds solved during a time attack game.
    pub fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }

    /// Points for a correct answer.
    fn round_score(&self) -> u32 {
        let mode_multiplier: f32 = match self.mode {
            GameMode::Classic => 1.0,
            GameMode::TimeAttack => 2.0,
        };
        (BASE_SCORE * self.config.score_multiplier * mode_multiplier).floor() as u32
    }

    /// Select a tile by its ID.
    pub fn select_tile(&mut self, tile_id: usize) -> SelectionEvent {
        if self.status != GameStatus::Playing || self.round_solved {
            return SelectionEvent::Rejected;
        }
        let tile: Tile = match self.grid.tile(tile_id) {
            Some(t) => *t,
            None => return SelectionEvent::Rejected,
        };
        if !self.selection.attempt_select_tile(&tile) {
            return SelectionEvent::Rejected;
        }
        self.after_selection()
    }

    /// Select an operator instance.
    pub fn select_operator(&mut self, operator: &OperatorInstance) -> SelectionEvent {
        if self.status != GameStatus::Playing
            || self.round_solved
            || !operator.fits(self.grid.size())
        {
            return SelectionEvent::Rejected;
        }
        if !self.selection.attempt_select_operator(operator) {
            return SelectionEvent::Rejected;
        }
        self.after_selection()
    }

    /// Refresh the tile display flags and submit the selection when it is complete.
    fn after_selection(&mut self) -> SelectionEvent {
        self.grid.clear_selected();
        let ids: Vec<usize> = self.selection.tiles().iter().map(|t| t.id).collect();
        for id in ids {
            self.grid.set_selected(id, true);
        }

        if !self.selection.is_complete() {
            return SelectionEvent::Accepted;
        }
        let tiles: Vec<Tile> = self.selection.tiles().to_vec();
        let operators: Vec<Operator> = self.selection.operators();
        let calculation: String = self.selection.calculation();
        let result: Option<i32> = self.selection.result();
        let correct: bool = self.check_solution(&tiles, &operators);
        SelectionEvent::Completed(Submission {
            calculation,
            result,
            correct,
        })
    }

    /// Discard the selection in progress.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.grid.clear_selected();
    }

    /// Evaluate the path and, if the result is the target, add the round score.
    ///
    /// The selection is cleared in both cases.
    pub fn submit_solution(&mut self, tiles: &[Tile], operators: &[Operator]) -> bool {
        if self.status != GameStatus::Playing || self.round_solved {
            return false;
        }
        let correct: bool = self.check_solution(tiles, operators);
        self.clear_selection();
        correct
    }

    /// Whether the tiles are a run of this grid that the player can select, and the operators
    /// are offered by the difficulty level.
    fn is_playable(&self, tiles: &[Tile], operators: &[Operator]) -> bool {
        tiles.len() == self.config.tiles_count
            && operators.len() == self.config.operators_count
            && tiles.iter().all(|t| {
                self.grid
                    .tile(t.id)
                    .is_some_and(|g| g.value == t.value && g.position == t.position)
            })
            && operators
                .iter()
                .all(|o| self.config.available_operators.contains(o))
            && path::is_valid_path(tiles)
    }

    /// Evaluate the path and update the score. The selection is kept for display.
    fn check_solution(&mut self, tiles: &[Tile], operators: &[Operator]) -> bool {
        if !self.is_playable(tiles, operators) {
            debug!(
                "Rejected path {}: not a valid path of the grid",
                calculator::format_calculation(tiles, operators)
            );
            return false;
        }
        let result: Option<i32> = calculator::calculate_path_result(tiles, operators);
        if result != Some(self.current_target) {
            debug!(
                "Wrong answer {} = {result:?}, target {}",
                calculator::format_calculation(tiles, operators),
                self.current_target
            );
            return false;
        }

        self.score += self.round_score();
        self.round_solved = true;
        if self.mode == GameMode::TimeAttack {
            self.rounds_completed += 1;
        }
        debug!(
            "Correct answer {} = {}, score {}",
            calculator::format_calculation(tiles, operators),
            self.current_target,
            self.score
        );
        true
    }

    /// Move to the next round.
    ///
    /// A classic game is completed after the last round. A time attack game gets a new target
    /// from the same grid.
    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.status == GameStatus::Completed {
            return;
        }
        self.clear_selection();
        self.round_solved = false;

        match self.mode {
            GameMode::TimeAttack => {
                let combos: Vec<GameCombination> =
                    combinations::get_all_combinations(&self.grid, self.config);
                let new_targets: Vec<i32> =
                    targets::generate_targets(&combos, self.config.total_rounds, rng);
                if !new_targets.is_empty() {
                    self.current_target = new_targets[rng.random_range(0..new_targets.len())];
                    self.current_round += 1;
                }
            }
            GameMode::Classic => {
                if self.current_round >= self.total_rounds {
                    info!(
                        "Game completed, score {} in {:?}",
                        self.score, self.elapsed
                    );
                    self.status = GameStatus::Completed;
                    return;
                }
                self.current_round += 1;
                self.current_target = self.targets[self.current_round - 1];
            }
        }
        debug!(
            "Round {}/{}, target {}",
            self.current_round, self.total_rounds, self.current_target
        );
    }

    /// Pause the game. The selection in progress is discarded.
    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing {
            self.clear_selection();
            self.status = GameStatus::Paused;
        }
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
        }
    }

    /// Advance the clocks by `delta`. The caller calls it at a fixed interval, such as 100ms.
    ///
    /// A time attack game is completed when its countdown reaches zero.
    pub fn tick(&mut self, delta: Duration) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.elapsed += delta;

        if let Some(left) = self.time_left {
            let left: Duration = left.saturating_sub(delta);
            self.time_left = Some(left);
            if left.is_zero() {
                info!(
                    "Time is up: {} rounds, score {}",
                    self.rounds_completed, self.score
                );
                self.clear_selection();
                self.status = GameStatus::Completed;
            }
        }
    }

    /// Return a path that reaches the current target.
    pub fn hint(&self) -> Option<GameCombination> {
        combinations::find_hint(&self.grid, self.config, self.current_target)
    }
}
