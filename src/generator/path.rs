/*
path.rs

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

//! Straight-line paths of tiles.
//!
//! [`is_valid_path`] decides whether a list of tiles is a run that the player can select.
//! Both the click selection ([`crate::selection`]) and the drag selection ([`crate::swipe`]) use
//! it before accepting a tile.

use super::tile::{Grid, Position, Tile};

/// Whether the two positions share an edge (no diagonals).
pub fn are_adjacent(a: Position, b: Position) -> bool {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col) == 1
}

/// Whether the given tiles form a valid path.
///
/// A valid path has at least two tiles, each tile is adjacent to the next one, and paths longer
/// than two tiles stay on a single row or a single column without gaps or repeated tiles.
pub fn is_valid_path(tiles: &[Tile]) -> bool {
    let positions: Vec<Position> = tiles.iter().map(|t| t.position).collect();
    is_valid_position_path(&positions)
}

/// Whether the given positions form a valid path. See [`is_valid_path`].
pub fn is_valid_position_path(positions: &[Position]) -> bool {
    if positions.len() < 2 {
        return false;
    }

    if !positions.windows(2).all(|w| are_adjacent(w[0], w[1])) {
        return false;
    }

    if positions.len() > 2 {
        let first: Position = positions[0];
        let horizontal: bool = positions.iter().all(|p| p.row == first.row);
        let vertical: bool = positions.iter().all(|p| p.col == first.col);

        let mut axis: Vec<usize> = if horizontal {
            positions.iter().map(|p| p.col).collect()
        } else if vertical {
            positions.iter().map(|p| p.row).collect()
        } else {
            return false;
        };

        // The coordinates along the run must be consecutive
        axis.sort_unstable();
        if !axis.windows(2).all(|w| w[1] == w[0] + 1) {
            return false;
        }
    }
    true
}

/// Return the tiles from `start` to `end`, both included, when they are on the same row or on
/// the same column. Otherwise, return an empty list.
pub fn tiles_between(start: &Tile, end: &Tile, grid: &Grid) -> Vec<Tile> {
    let (s, e) = (start.position, end.position);
    let positions: Vec<Position> = if s.row == e.row {
        if s.col <= e.col {
            (s.col..=e.col).map(|c| Position::new(s.row, c)).collect()
        } else {
            (e.col..=s.col).rev().map(|c| Position::new(s.row, c)).collect()
        }
    } else if s.col == e.col {
        if s.row <= e.row {
            (s.row..=e.row).map(|r| Position::new(r, s.col)).collect()
        } else {
            (e.row..=s.row).rev().map(|r| Position::new(r, s.col)).collect()
        }
    } else {
        return Vec::new();
    };

    positions
        .into_iter()
        .filter_map(|p| grid.at(p).copied())
        .collect()
}
