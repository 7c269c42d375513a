/*
lib.rs

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


//! Grid Genius is an arithmetic puzzle game.
//!
//! The player finds a straight path of adjacent tiles in a grid of numbers, and picks the
//! operators between the tiles so that the calculation, evaluated from left to right, gives the
//! target number of the round.
//!
//! * [`generator`] builds the grids and the targets.
//! * [`selection`] validates the tiles and operators that the player clicks.
//! * [`swipe`] tracks the path that the player draws with a drag gesture.
//! * [`game`] manages the rounds, the score, and the timers.

pub mod game;
pub mod generator;
pub mod selection;
pub mod swipe;
