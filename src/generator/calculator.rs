/*
calculator.rs

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

//! Evaluate tile values and operators strictly from left to right.
//!
//! There is no operator precedence: `2 + 3 * 4` is `(2 + 3) * 4 = 20`.

use super::operator::Operator;
use super::tile::Tile;

/// Evaluate `((v0 op0 v1) op1 v2) ...`.
///
/// Return None when the number of operators is not the number of values minus one, or when an
/// intermediate result overflows.
pub fn evaluate(values: &[i32], operators: &[Operator]) -> Option<i32> {
    let (first, rest) = values.split_first()?;
    if rest.len() != operators.len() {
        return None;
    }
    rest.iter()
        .zip(operators)
        .try_fold(*first, |acc, (v, op)| op.apply(acc, *v))
}

/// Same as [`evaluate`], but the operators are given as symbols.
///
/// Return None if a symbol is not `+`, `-`, or `*`.
pub fn evaluate_symbols(values: &[i32], symbols: &[char]) -> Option<i32> {
    let operators: Vec<Operator> = symbols
        .iter()
        .map(|s| Operator::try_from(*s))
        .collect::<Result<_, _>>()
        .ok()?;
    evaluate(values, &operators)
}

/// Evaluate the path formed by the given tiles and operators.
pub fn calculate_path_result(tiles: &[Tile], operators: &[Operator]) -> Option<i32> {
    let values: Vec<i32> = tiles.iter().map(|t| t.value).collect();
    evaluate(&values, operators)
}

/// Build the calculation string, such as `4 - 7 + 10`, for the player feedback.
///
/// Missing operators are not printed.
pub fn format_calculation(tiles: &[Tile], operators: &[Operator]) -> String {
    let mut s: String = String::new();
    for (i, tile) in tiles.iter().enumerate() {
        s.push_str(&tile.value.to_string());
        if let Some(op) = operators.get(i) {
            s.push_str(&format!(" {op} "));
        }
    }
    s
}
