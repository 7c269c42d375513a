/*
tile.rs

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

//! Numeric tiles and the grid that owns them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::operator::{Operator, OperatorInstance, Orientation};

/// Row and column of a tile.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Numeric cell of the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Tile identifier: `row * grid_size + col`.
    pub id: usize,

    /// Tile value, between 1 and 9.
    pub value: i32,

    pub position: Position,

    /// Display flag. Not used to decide anything.
    pub selected: bool,
}

impl Tile {
    /// Create a [`Tile`] object.
    pub fn new(id: usize, value: i32, position: Position) -> Self {
        Self {
            id,
            value,
            position,
            selected: false,
        }
    }
}

/// Square grid of tiles, stored row by row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid from a list of values given row by row.
    ///
    /// Return None if the number of values is not a square of `size`.
    pub fn from_values(size: usize, values: &[i32]) -> Option<Self> {
        if values.len() != size * size {
            return None;
        }
        let tiles: Vec<Tile> = values
            .iter()
            .enumerate()
            .map(|(id, v)| Tile::new(id, *v, Position::new(id / size, id % size)))
            .collect();
        Some(Self { size, tiles })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return all the tiles, row by row.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Return the tile with the given ID.
    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Return the tile at the given position.
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.tiles.get(row * self.size + col)
    }

    /// Return the tile at the given position.
    pub fn at(&self, position: Position) -> Option<&Tile> {
        self.get(position.row, position.col)
    }

    /// Set the display flag of a tile.
    pub fn set_selected(&mut self, id: usize, selected: bool) {
        if let Some(t) = self.tiles.get_mut(id) {
            t.selected = selected;
        }
    }

    /// Reset the display flag of all the tiles.
    pub fn clear_selected(&mut self) {
        for t in self.tiles.iter_mut() {
            t.selected = false;
        }
    }

    /// Return every operator instance that can be placed on the grid, for the given symbols.
    ///
    /// Slots are listed row by row, horizontal slots before vertical slots.
    pub fn operator_slots(&self, available: &[Operator]) -> Vec<OperatorInstance> {
        let n: usize = self.size.saturating_sub(1);
        let mut slots: Vec<OperatorInstance> = Vec::with_capacity(2 * self.size * n * available.len());

        for row in 0..self.size {
            for col in 0..n {
                for op in available {
                    slots.push(OperatorInstance::new(row, col, Orientation::Horizontal, *op));
                }
            }
        }
        for row in 0..n {
            for col in 0..self.size {
                for op in available {
                    slots.push(OperatorInstance::new(row, col, Orientation::Vertical, *op));
                }
            }
        }
        slots
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.tiles.chunks(self.size.max(1)) {
            let line: Vec<String> = row.iter().map(|t| t.value.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
