/*
operator.rs

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

//! Arithmetic operators and their placement on the grid.
//!
//! Operators sit in slots between two adjacent tiles.
//! Several slots can carry the same symbol, so an operator the player selects is always an
//! [`OperatorInstance`]: a slot position, an orientation, and a symbol.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::tile::Position;

/// Arithmetic operator.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    /// Return the symbol of the operator.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
        }
    }

    /// Apply the operator. Return None on overflow.
    pub fn apply(&self, lhs: i32, rhs: i32) -> Option<i32> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when a character is not an operator symbol.
#[derive(Debug, PartialEq)]
pub struct OperatorParseError(pub char);

impl fmt::Display for OperatorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid operator: {}", self.0)
    }
}

impl Error for OperatorParseError {}

impl TryFrom<char> for Operator {
    type Error = OperatorParseError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' | '×' => Ok(Operator::Multiply),
            _ => Err(OperatorParseError(symbol)),
        }
    }
}

/// Orientation of an operator slot.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The slot joins the tile at `(row, col)` and the tile at `(row, col + 1)`.
    Horizontal,

    /// The slot joins the tile at `(row, col)` and the tile at `(row + 1, col)`.
    Vertical,
}

/// An operator at a specific slot of the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OperatorInstance {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub operator: Operator,
}

impl OperatorInstance {
    /// Create an [`OperatorInstance`] object.
    pub fn new(row: usize, col: usize, orientation: Orientation, operator: Operator) -> Self {
        Self {
            row,
            col,
            orientation,
            operator,
        }
    }

    /// Return the two tile positions that the slot joins, or None if the second position
    /// cannot be represented.
    pub fn ends(&self) -> Option<(Position, Position)> {
        let first: Position = Position::new(self.row, self.col);
        let second: Position = match self.orientation {
            Orientation::Horizontal => Position::new(self.row, self.col.checked_add(1)?),
            Orientation::Vertical => Position::new(self.row.checked_add(1)?, self.col),
        };
        Some((first, second))
    }

    /// Whether the slot is next to the tile at the given position.
    pub fn touches(&self, position: Position) -> bool {
        self.ends().is_some_and(|(a, b)| a == position || b == position)
    }

    /// Return the position on the other side of the slot, or None if the slot does not touch
    /// the given position.
    pub fn other_end(&self, position: Position) -> Option<Position> {
        let (a, b) = self.ends()?;
        if a == position {
            Some(b)
        } else if b == position {
            Some(a)
        } else {
            None
        }
    }

    /// Whether both ends of the slot are inside a grid of the given size.
    pub fn fits(&self, grid_size: usize) -> bool {
        self.ends().is_some_and(|(_, b)| b.row < grid_size && b.col < grid_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_symbols() {
        assert_eq!(Operator::try_from('+'), Ok(Operator::Add));
        assert_eq!(Operator::try_from('-'), Ok(Operator::Subtract));
        assert_eq!(Operator::try_from('*'), Ok(Operator::Multiply));
        assert_eq!(Operator::try_from('/'), Err(OperatorParseError('/')));
    }

    #[test]
    fn apply_detects_overflow() {
        assert_eq!(Operator::Multiply.apply(6, 7), Some(42));
        assert_eq!(Operator::Subtract.apply(2, 9), Some(-7));
        assert_eq!(Operator::Multiply.apply(i32::MAX, 2), None);
    }

    #[test]
    fn horizontal_slot_ends() {
        let op = OperatorInstance::new(1, 2, Orientation::Horizontal, Operator::Add);
        assert!(op.touches(Position::new(1, 2)));
        assert!(op.touches(Position::new(1, 3)));
        assert!(!op.touches(Position::new(2, 2)));
        assert_eq!(op.other_end(Position::new(1, 3)), Some(Position::new(1, 2)));
        assert_eq!(op.other_end(Position::new(0, 0)), None);
    }

    #[test]
    fn vertical_slot_ends() {
        let op = OperatorInstance::new(0, 1, Orientation::Vertical, Operator::Multiply);
        assert_eq!(op.other_end(Position::new(0, 1)), Some(Position::new(1, 1)));
        assert!(op.fits(2));
        assert!(!OperatorInstance::new(1, 1, Orientation::Vertical, Operator::Add).fits(2));
    }

    #[test]
    fn slot_at_the_end_of_the_index_range() {
        let op = OperatorInstance::new(0, usize::MAX, Orientation::Horizontal, Operator::Add);
        assert_eq!(op.ends(), None);
        assert!(!op.fits(4));
        assert!(!op.touches(Position::new(0, usize::MAX)));
        assert_eq!(op.other_end(Position::new(0, usize::MAX)), None);
        let op = OperatorInstance::new(usize::MAX, 0, Orientation::Vertical, Operator::Add);
        assert!(!op.fits(usize::MAX));
    }
}
