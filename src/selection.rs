/*
selection.rs

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

//! Manage the tiles and operators that the player selects one at a time.
//!
//! The player alternates between tiles and operators, starting with a tile:
//! tile, operator, tile, operator, tile.
//! Every tile must continue the straight line formed by the previous tiles, and an operator
//! must sit in a slot next to the last selected tile, on the side where the path can continue.
//! The next tile is then the tile on the other side of that slot.
//!
//! Selecting an element that is already selected removes that element and everything selected
//! after it.
//!
//! Rejected attempts never modify the selection. The methods return `false` and the caller
//! decides how to notify the player.

use log::debug;

use crate::generator::calculator;
use crate::generator::difficulty::DifficultyConfig;
use crate::generator::operator::{Operator, OperatorInstance};
use crate::generator::path;
use crate::generator::tile::{Position, Tile};

/// What the selection expects next.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing is selected. The next element is a tile.
    Empty,

    /// The next element is a tile.
    TileTurn,

    /// The next element is an operator.
    OperatorTurn,

    /// All the tiles and operators of the path are selected.
    Complete,
}

/// Tiles and operators selected by the player.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Selected tiles, in the selection order.
    tiles: Vec<Tile>,

    /// Selected operators, in the selection order.
    operators: Vec<OperatorInstance>,

    /// Number of tiles in a complete path.
    tiles_count: usize,

    /// Number of operators in a complete path.
    operators_count: usize,

    /// Operators that the player is allowed to select.
    available_operators: &'static [Operator],
}

impl Selection {
    /// Create a [`Selection`] object for the given difficulty level.
    pub fn new(config: &'static DifficultyConfig) -> Self {
        Self {
            tiles: Vec::with_capacity(config.tiles_count),
            operators: Vec::with_capacity(config.operators_count),
            tiles_count: config.tiles_count,
            operators_count: config.operators_count,
            available_operators: config.available_operators,
        }
    }

    /// Remove all the selected tiles and operators.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.operators.clear();
    }

    /// Return the selected tiles.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Return the selected operator instances.
    pub fn operator_instances(&self) -> &[OperatorInstance] {
        &self.operators
    }

    /// Return the symbols of the selected operators.
    pub fn operators(&self) -> Vec<Operator> {
        self.operators.iter().map(|o| o.operator).collect()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether the path is complete.
    pub fn is_complete(&self) -> bool {
        self.tiles.len() == self.tiles_count && self.operators.len() == self.operators_count
    }

    /// Whether the tile is selected.
    pub fn contains_tile(&self, tile_id: usize) -> bool {
        self.tiles.iter().any(|t| t.id == tile_id)
    }

    /// Whether the operator instance is selected.
    pub fn contains_operator(&self, operator: &OperatorInstance) -> bool {
        self.operators.contains(operator)
    }

    /// Return what the selection expects next.
    pub fn state(&self) -> SelectionState {
        if self.tiles.is_empty() {
            SelectionState::Empty
        } else if self.is_complete() {
            SelectionState::Complete
        } else if self.tiles.len() == self.operators.len() {
            SelectionState::TileTurn
        } else {
            SelectionState::OperatorTurn
        }
    }

    /// Try to add a tile to the selection, and return whether the tile is accepted.
    ///
    /// Selecting a tile that is already selected removes it, as well as the tiles and operators
    /// selected after it.
    pub fn attempt_select_tile(&mut self, tile: &Tile) -> bool {
        if let Some(i) = self.tiles.iter().position(|t| t.id == tile.id) {
            debug!("Tile {} deselected, truncating the selection", tile.id);
            self.tiles.truncate(i);
            self.operators.truncate(i);
            return true;
        }

        if self.tiles.len() != self.operators.len() || self.tiles.len() >= self.tiles_count {
            debug!("Tile {} rejected: not a tile turn", tile.id);
            return false;
        }

        if let Some(last) = self.tiles.last() {
            // The pending operator decides which neighbor comes next
            if let Some(op) = self.operators.last()
                && op.other_end(last.position) != Some(tile.position)
            {
                debug!(
                    "Tile {} rejected: not connected to tile {} by the selected operator",
                    tile.id, last.id
                );
                return false;
            }

            let mut candidate: Vec<Tile> = self.tiles.clone();
            candidate.push(*tile);
            if !path::is_valid_path(&candidate) {
                debug!("Tile {} rejected: not a straight path", tile.id);
                return false;
            }
        }

        self.tiles.push(*tile);
        true
    }

    /// Try to add an operator to the selection, and return whether the operator is accepted.
    ///
    /// Selecting an operator instance that is already selected removes it, as well as the tiles
    /// and operators selected after it.
    pub fn attempt_select_operator(&mut self, operator: &OperatorInstance) -> bool {
        if let Some(i) = self.operators.iter().position(|o| o == operator) {
            debug!("Operator {operator:?} deselected, truncating the selection");
            self.operators.truncate(i);
            self.tiles.truncate(i + 1);
            return true;
        }

        let last: &Tile = match self.tiles.last() {
            Some(t) => t,
            None => {
                debug!("Operator {operator:?} rejected: no tile selected");
                return false;
            }
        };

        if self.tiles.len() != self.operators.len() + 1
            || self.operators.len() >= self.operators_count
        {
            debug!("Operator {operator:?} rejected: not an operator turn");
            return false;
        }

        if !self.available_operators.contains(&operator.operator) {
            debug!("Operator {operator:?} rejected: not available at this level");
            return false;
        }

        let next: Position = match operator.other_end(last.position) {
            Some(p) => p,
            None => {
                debug!(
                    "Operator {operator:?} rejected: not next to tile {}",
                    last.id
                );
                return false;
            }
        };

        // The tile on the other side of the slot must be able to continue the path
        let mut positions: Vec<Position> = self.tiles.iter().map(|t| t.position).collect();
        positions.push(next);
        if !path::is_valid_position_path(&positions) {
            debug!("Operator {operator:?} rejected: the next tile would not continue the path");
            return false;
        }

        self.operators.push(*operator);
        true
    }

    /// Return the result of the complete path, or None if the path is not complete.
    pub fn result(&self) -> Option<i32> {
        if !self.is_complete() {
            return None;
        }
        calculator::calculate_path_result(&self.tiles, &self.operators())
    }

    /// Return the result of the tiles selected so far, for live feedback.
    ///
    /// An operator waiting for its second tile is ignored.
    pub fn current_result(&self) -> Option<i32> {
        let n: usize = self.tiles.len().checked_sub(1)?;
        let ops: Vec<Operator> = self.operators().into_iter().take(n).collect();
        calculator::calculate_path_result(&self.tiles, &ops)
    }

    /// Return the calculation string, such as `4 - 7 +`, for the player feedback.
    pub fn calculation(&self) -> String {
        let mut s: String = calculator::format_calculation(&self.tiles, &self.operators());
        if self.operators.len() == self.tiles.len() && !self.tiles.is_empty() {
            s.truncate(s.trim_end().len());
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::difficulty::Difficulty;
    use crate::generator::operator::Orientation;
    use crate::generator::tile::Grid;

    fn grid_4() -> Grid {
        Grid::from_values(4, &(1..=16).collect::<Vec<i32>>()).unwrap()
    }

    fn h(row: usize, col: usize, op: Operator) -> OperatorInstance {
        OperatorInstance::new(row, col, Orientation::Horizontal, op)
    }

    fn v(row: usize, col: usize, op: Operator) -> OperatorInstance {
        OperatorInstance::new(row, col, Orientation::Vertical, op)
    }

    #[test]
    fn operator_before_tile_is_rejected() {
        let mut s = Selection::new(Difficulty::Medium.config());
        assert_eq!(s.state(), SelectionState::Empty);
        assert!(!s.attempt_select_operator(&h(0, 0, Operator::Add)));
        assert!(s.is_empty());
    }

    #[test]
    fn two_tiles_in_a_row_are_rejected() {
        let grid = grid_4();
        let mut s = Selection::new(Difficulty::Medium.config());
        assert!(s.attempt_select_tile(grid.tile(0).unwrap()));
        assert_eq!(s.state(), SelectionState::OperatorTurn);
        assert!(!s.attempt_select_tile(grid.tile(1).unwrap()));
        assert_eq!(s.tiles().len(), 1);

        // Selecting the same tile again removes it
        assert!(s.attempt_select_tile(grid.tile(0).unwrap()));
        assert!(s.is_empty());
    }

    #[test]
    fn complete_three_tile_path() {
        let grid = grid_4();
        let mut s = Selection::new(Difficulty::Medium.config());
        assert!(s.attempt_select_tile(grid.get(1, 1).unwrap()));
        assert!(s.attempt_select_operator(&h(1, 1, Operator::Multiply)));
        assert_eq!(s.state(), SelectionState::TileTurn);
        assert_eq!(s.current_result(), Some(6));
        assert!(s.attempt_select_tile(grid.get(1, 2).unwrap()));
        assert_eq!(s.current_result(), Some(42));
        assert!(s.attempt_select_operator(&h(1, 2, Operator::Subtract)));
        assert!(s.attempt_select_tile(grid.get(1, 3).unwrap()));
        assert!(s.is_complete());
        assert_eq!(s.state(), SelectionState::Complete);
        // (6 * 7) - 8
        assert_eq!(s.result(), Some(34));
        assert_eq!(s.calculation(), "6 * 7 - 8");

        // Nothing more can be added
        assert!(!s.attempt_select_operator(&h(1, 0, Operator::Add)));
        assert!(!s.attempt_select_tile(grid.get(1, 0).unwrap()));
    }

    #[test]
    fn operator_must_touch_the_last_tile() {
        let grid = grid_4();
        let mut s = Selection::new(Difficulty::Medium.config());
        assert!(s.attempt_select_tile(grid.get(1, 1).unwrap()));
        assert!(!s.attempt_select_operator(&h(1, 2, Operator::Add)));
        assert!(!s.attempt_select_operator(&v(2, 1, Operator::Add)));
        assert!(s.attempt_select_operator(&h(1, 0, Operator::Add)));
        assert_eq!(s.operator_instances().len(), 1);
    }

    #[test]
    fn operator_slot_decides_the_next_tile() {
        let grid = grid_4();
        let mut s = Selection::new(Difficulty::Medium.config());
        assert!(s.attempt_select_tile(grid.get(1, 1).unwrap()));

        // Slot on the left of the tile: the next tile is on the left
        assert!(s.attempt_select_operator(&h(1, 0, Operator::Add)));
        assert!(!s.attempt_select_tile(grid.get(1, 2).unwrap()));
        assert!(!s.attempt_select_tile(grid.get(0, 1).unwrap()));
        assert!(s.attempt_select_tile(grid.get(1, 0).unwrap()));

        // Slot above the tile
        s.clear();
        assert!(s.attempt_select_tile(grid.get(1, 1).unwrap()));
        assert!(s.attempt_select_operator(&v(0, 1, Operator::Add)));
        assert!(!s.attempt_select_tile(grid.get(2, 1).unwrap()));
        assert!(s.attempt_select_tile(grid.get(0, 1).unwrap()));
        assert_eq!(s.current_result(), Some(8));
    }

    #[test]
    fn path_must_stay_straight() {
        let grid = grid_4();
        let mut s = Selection::new(Difficulty::Medium.config());
        assert!(s.attempt_select_tile(grid.get(0, 0).unwrap()));
        assert!(s.attempt_select_operator(&h(0, 0, Operator::Add)));
        assert!(s.attempt_select_tile(grid.get(0, 1).unwrap()));
        // The slot is next to the last tile, but the tile below would bend the path
        assert!(!s.attempt_select_operator(&v(0, 1, Operator::Add)));
        assert_eq!(s.operator_instances().len(), 1);
        assert!(s.attempt_select_operator(&h(0, 1, Operator::Add)));
        assert!(!s.attempt_select_tile(grid.get(1, 1).unwrap()));
        assert_eq!(s.tiles().len(), 2);
    }

    #[test]
    fn operator_leading_back_is_rejected() {
        let grid = grid_4();
        let mut s = Selection::new(Difficulty::Medium.config());
        assert!(s.attempt_select_tile(grid.get(0, 0).unwrap()));
        assert!(s.attempt_select_operator(&h(0, 0, Operator::Add)));
        assert!(s.attempt_select_tile(grid.get(0, 1).unwrap()));
        assert!(!s.attempt_select_operator(&h(0, 0, Operator::Subtract)));
    }

    #[test]
    fn unavailable_operator_is_rejected() {
        let grid = grid_4();
        let mut s = Selection::new(Difficulty::Easy.config());
        assert!(s.attempt_select_tile(grid.get(0, 0).unwrap()));
        assert!(!s.attempt_select_operator(&h(0, 0, Operator::Multiply)));
        assert!(s.attempt_select_operator(&h(0, 0, Operator::Subtract)));
    }

    #[test]
    fn deselecting_truncates_everything_after() {
        let grid = grid_4();
        let mut s = Selection::new(Difficulty::Medium.config());
        let first = h(2, 0, Operator::Add);
        assert!(s.attempt_select_tile(grid.get(2, 0).unwrap()));
        assert!(s.attempt_select_operator(&first));
        assert!(s.attempt_select_tile(grid.get(2, 1).unwrap()));
        assert!(s.attempt_select_operator(&h(2, 1, Operator::Add)));
        assert!(s.attempt_select_tile(grid.get(2, 2).unwrap()));

        // Middle tile: keeps the first tile and operator
        assert!(s.attempt_select_tile(grid.get(2, 1).unwrap()));
        assert_eq!(s.tiles().len(), 1);
        assert_eq!(s.operator_instances(), &[first]);
        assert_eq!(s.state(), SelectionState::TileTurn);

        // First operator: keeps the first tile
        assert!(s.attempt_select_operator(&first));
        assert_eq!(s.tiles().len(), 1);
        assert!(s.operator_instances().is_empty());
        assert_eq!(s.state(), SelectionState::OperatorTurn);
    }

    #[test]
    fn same_symbol_at_another_slot_is_another_instance() {
        let grid = grid_4();
        let mut s = Selection::new(Difficulty::Medium.config());
        assert!(s.attempt_select_tile(grid.get(0, 1).unwrap()));
        assert!(s.attempt_select_operator(&h(0, 1, Operator::Add)));
        assert!(s.contains_operator(&h(0, 1, Operator::Add)));
        assert!(!s.contains_operator(&h(0, 0, Operator::Add)));
        // A second instance is not a deselection, and it is not the operator turn
        assert!(!s.attempt_select_operator(&h(0, 0, Operator::Add)));
        assert_eq!(s.operator_instances().len(), 1);
    }

    #[test]
    fn rejected_attempts_do_not_change_the_selection() {
        let grid = grid_4();
        let mut s = Selection::new(Difficulty::Medium.config());
        assert!(s.attempt_select_tile(grid.get(3, 3).unwrap()));
        let before = (s.tiles().to_vec(), s.operator_instances().to_vec());
        assert!(!s.attempt_select_tile(grid.get(0, 0).unwrap()));
        assert!(!s.attempt_select_operator(&v(0, 0, Operator::Add)));
        assert_eq!(before, (s.tiles().to_vec(), s.operator_instances().to_vec()));
    }
}
