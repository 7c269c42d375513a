/*
swipe.rs

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

//! Manage a path that the player draws with a drag gesture.
//!
//! The input layer reports the tiles under the pointer, and the operator slots that the pointer
//! crosses between two tiles.
//! Going back over a tile of the path shortens the path to that tile.

use log::debug;

use crate::generator::calculator;
use crate::generator::difficulty::DifficultyConfig;
use crate::generator::operator::Operator;
use crate::generator::path;
use crate::generator::tile::{Grid, Tile};

/// Tiles and operators of the drag gesture in progress.
#[derive(Debug, Clone, Default)]
pub struct Swipe {
    /// Whether a gesture is in progress.
    active: bool,

    /// Tiles under the gesture.
    tiles: Vec<Tile>,

    /// Operator crossed between tile `i` and tile `i + 1`, if detected.
    operators: Vec<Option<Operator>>,

    /// Maximum number of tiles in the path.
    max_tiles: usize,

    /// Operators that the player is allowed to use.
    available_operators: &'static [Operator],
}

impl Swipe {
    /// Create a [`Swipe`] object for the given difficulty level.
    pub fn new(config: &'static DifficultyConfig) -> Self {
        Self {
            active: false,
            tiles: Vec::with_capacity(config.tiles_count),
            operators: Vec::with_capacity(config.operators_count),
            max_tiles: config.tiles_count,
            available_operators: config.available_operators,
        }
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Return the tiles of the path.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Start a gesture on the given tile.
    pub fn start(&mut self, tile: &Tile) {
        self.active = true;
        self.tiles.clear();
        self.operators.clear();
        self.tiles.push(*tile);
    }

    /// Add the tile under the pointer to the path, and return whether the path changed.
    ///
    /// A tile already in the path shortens the path back to it.
    /// Other tiles are added only if the path stays a valid straight path.
    pub fn extend(&mut self, tile: &Tile) -> bool {
        if !self.active {
            return false;
        }

        if let Some(i) = self.tiles.iter().position(|t| t.id == tile.id) {
            if i + 1 == self.tiles.len() {
                return false;
            }
            self.tiles.truncate(i + 1);
            self.operators.truncate(i);
            debug!("Swipe back to tile {}", tile.id);
            return true;
        }

        if self.tiles.len() >= self.max_tiles {
            return false;
        }

        let mut candidate: Vec<Tile> = self.tiles.clone();
        candidate.push(*tile);
        if !path::is_valid_path(&candidate) {
            return false;
        }
        self.tiles = candidate;
        self.operators.push(None);
        true
    }

    /// Add the tile under the pointer, and the tiles that the pointer skipped over if the
    /// pointer moved fast.
    pub fn extend_to(&mut self, tile: &Tile, grid: &Grid) -> bool {
        let last: Tile = match self.tiles.last() {
            Some(t) => *t,
            None => return false,
        };
        let between: Vec<Tile> = path::tiles_between(&last, tile, grid);
        let mut changed: bool = false;
        for t in between.iter().skip(1) {
            if self.extend(t) {
                changed = true;
            } else {
                break;
            }
        }
        changed
    }

    /// Record the operator crossed between tile `step` and tile `step + 1`.
    ///
    /// Operators that the difficulty level does not offer are ignored.
    pub fn set_operator(&mut self, step: usize, operator: Operator) -> bool {
        if !self.available_operators.contains(&operator) {
            debug!("Operator {operator} ignored: not available at this level");
            return false;
        }
        match self.operators.get_mut(step) {
            Some(o) => {
                *o = Some(operator);
                true
            }
            None => false,
        }
    }

    /// Return the operators when all of them are known.
    pub fn operators(&self) -> Option<Vec<Operator>> {
        self.operators.iter().copied().collect()
    }

    /// Return the current result of the path, or None while an operator is unknown.
    pub fn result(&self) -> Option<i32> {
        calculator::calculate_path_result(&self.tiles, &self.operators()?)
    }

    /// Abandon the gesture.
    pub fn cancel(&mut self) {
        self.active = false;
        self.tiles.clear();
        self.operators.clear();
    }

    /// End the gesture and return the path if it is complete.
    pub fn finish(&mut self) -> Option<(Vec<Tile>, Vec<Operator>)> {
        let ret = match self.operators() {
            Some(ops) if self.tiles.len() == self.max_tiles => Some((self.tiles.clone(), ops)),
            _ => None,
        };
        self.cancel();
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::difficulty::Difficulty;

    fn grid() -> Grid {
        Grid::from_values(4, &(1..=16).collect::<Vec<i32>>()).unwrap()
    }

    #[test]
    fn straight_drag() {
        let g = grid();
        let mut s = Swipe::new(Difficulty::Medium.config());
        s.start(g.get(0, 0).unwrap());
        assert!(s.extend(g.get(0, 1).unwrap()));
        assert!(s.extend(g.get(0, 2).unwrap()));
        assert!(!s.extend(g.get(0, 3).unwrap()));
        assert_eq!(s.result(), None);
        assert!(s.set_operator(0, Operator::Multiply));
        assert!(s.set_operator(1, Operator::Add));
        assert!(!s.set_operator(2, Operator::Add));
        assert_eq!(s.result(), Some(5));
        let (tiles, ops) = s.finish().unwrap();
        assert_eq!(tiles.len(), 3);
        assert_eq!(ops, vec![Operator::Multiply, Operator::Add]);
        assert!(!s.is_active());
    }

    #[test]
    fn bends_are_ignored() {
        let g = grid();
        let mut s = Swipe::new(Difficulty::Medium.config());
        s.start(g.get(0, 0).unwrap());
        assert!(s.extend(g.get(0, 1).unwrap()));
        assert!(!s.extend(g.get(1, 1).unwrap()));
        assert!(!s.extend(g.get(1, 0).unwrap()));
        assert_eq!(s.tiles().len(), 2);
    }

    #[test]
    fn going_back_truncates() {
        let g = grid();
        let mut s = Swipe::new(Difficulty::Medium.config());
        s.start(g.get(2, 0).unwrap());
        assert!(s.extend(g.get(2, 1).unwrap()));
        s.set_operator(0, Operator::Subtract);
        assert!(s.extend(g.get(2, 2).unwrap()));
        assert!(s.extend(g.get(2, 1).unwrap()));
        assert_eq!(s.tiles().len(), 2);
        assert_eq!(s.operators(), Some(vec![Operator::Subtract]));
        assert!(s.extend(g.get(2, 0).unwrap()));
        assert_eq!(s.tiles().len(), 1);
    }

    #[test]
    fn skipped_tiles_are_filled() {
        let g = grid();
        let mut s = Swipe::new(Difficulty::Medium.config());
        s.start(g.get(0, 3).unwrap());
        assert!(s.extend_to(g.get(2, 3).unwrap(), &g));
        let ids: Vec<usize> = s.tiles().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 7, 11]);
    }

    #[test]
    fn incomplete_gesture_gives_nothing() {
        let g = grid();
        let mut s = Swipe::new(Difficulty::Medium.config());
        assert!(!s.extend(g.get(0, 0).unwrap()));
        s.start(g.get(0, 0).unwrap());
        assert!(s.extend(g.get(1, 0).unwrap()));
        s.set_operator(0, Operator::Add);
        assert_eq!(s.finish(), None);
    }

    #[test]
    fn operators_follow_the_difficulty_level() {
        let g = grid();
        let mut s = Swipe::new(Difficulty::Easy.config());
        s.start(g.get(0, 0).unwrap());
        assert!(s.extend(g.get(0, 1).unwrap()));
        assert!(!s.extend(g.get(0, 2).unwrap()));
        assert!(!s.set_operator(0, Operator::Multiply));
        assert_eq!(s.operators(), None);
        assert!(s.set_operator(0, Operator::Subtract));
        assert_eq!(s.result(), Some(-1));
    }
}
