/*
gameplay.rs

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

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

use gridgenius::game::{Game, GameStatus, SelectionEvent};
use gridgenius::generator::combinations;
use gridgenius::generator::difficulty::{Difficulty, GameMode};
use gridgenius::generator::operator::{Operator, OperatorInstance, Orientation};
use gridgenius::generator::puzzle::Puzzle;
use gridgenius::generator::tile::Grid;
use gridgenius::swipe::Swipe;

#[test]
fn two_by_two_round() {
    let grid = Grid::from_values(2, &[1, 2, 3, 4]).unwrap();
    let puzzle = Puzzle {
        difficulty: Difficulty::Easy,
        grid,
        targets: vec![3],
    };
    let mut game = Game::from_puzzle(puzzle, GameMode::Classic).unwrap();

    assert_eq!(game.select_tile(0), SelectionEvent::Accepted);
    let plus = OperatorInstance::new(0, 0, Orientation::Horizontal, Operator::Add);
    assert_eq!(game.select_operator(&plus), SelectionEvent::Accepted);
    assert_eq!(game.selection().current_result(), Some(1));
    match game.select_tile(1) {
        SelectionEvent::Completed(s) => {
            assert!(s.correct);
            assert_eq!(s.result, Some(3));
            assert_eq!(s.calculation, "1 + 2");
        }
        e => panic!("unexpected event {e:?}"),
    }
    assert_eq!(game.score(), 10);

    let mut rng = StdRng::seed_from_u64(0);
    game.next_round(&mut rng);
    assert_eq!(game.status(), GameStatus::Completed);
}

#[test]
fn classic_game_solved_with_hints() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = Game::new(Difficulty::Hard, GameMode::Classic, &mut rng).unwrap();

    while game.status() == GameStatus::Playing {
        game.tick(Duration::from_millis(100));
        let hint = game.hint().unwrap();
        assert_eq!(hint.result, game.current_target());
        assert!(game.submit_solution(&hint.tiles, &hint.operators));
        game.next_round(&mut rng);
    }
    assert_eq!(game.status(), GameStatus::Completed);
    assert_eq!(game.current_round(), 5);
    assert_eq!(game.score(), 5 * 20);
    assert_eq!(game.elapsed(), Duration::from_millis(500));
}

#[test]
fn swipe_then_submit() {
    let puzzle = Puzzle {
        difficulty: Difficulty::Medium,
        grid: Grid::from_values(4, &(1..=16).collect::<Vec<i32>>()).unwrap(),
        targets: vec![23],
    };
    let mut game = Game::from_puzzle(puzzle, GameMode::TimeAttack).unwrap();
    let config = Difficulty::Medium.config();
    assert_eq!(
        combinations::count_solutions(&game.grid, config, game.current_target()),
        combinations::get_all_combinations(&game.grid, config)
            .iter()
            .filter(|c| c.result == 23)
            .count()
    );

    // Column 2 from the top: 3, 7, 11
    let mut swipe = Swipe::new(config);
    swipe.start(game.grid.get(0, 2).unwrap());
    assert!(swipe.extend_to(game.grid.get(2, 2).unwrap(), &game.grid));
    swipe.set_operator(0, Operator::Multiply);
    swipe.set_operator(1, Operator::Add);
    assert_eq!(swipe.result(), Some(32));
    swipe.set_operator(0, Operator::Add);
    swipe.set_operator(1, Operator::Add);
    assert_eq!(swipe.result(), Some(21));
    swipe.set_operator(0, Operator::Subtract);
    swipe.set_operator(1, Operator::Multiply);
    assert_eq!(swipe.result(), Some(-44));

    swipe.set_operator(0, Operator::Multiply);
    swipe.set_operator(1, Operator::Subtract);
    // 3 * 7 - 11 = 10: wrong answer
    let (tiles, operators) = swipe.finish().unwrap();
    assert!(!game.submit_solution(&tiles, &operators));
    assert_eq!(game.score(), 0);

    // Row 1: 5 * 6 - 7 = 23
    let tiles = vec![
        *game.grid.get(1, 0).unwrap(),
        *game.grid.get(1, 1).unwrap(),
        *game.grid.get(1, 2).unwrap(),
    ];
    assert!(game.submit_solution(&tiles, &[Operator::Multiply, Operator::Subtract]));
    assert_eq!(game.score(), 30);
    assert_eq!(game.rounds_completed(), 1);
}

#[test]
fn drag_with_an_unavailable_operator_cannot_score() {
    let puzzle = Puzzle {
        difficulty: Difficulty::Easy,
        grid: Grid::from_values(3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap(),
        targets: vec![6],
    };
    let mut game = Game::from_puzzle(puzzle, GameMode::Classic).unwrap();
    let mut swipe = Swipe::new(Difficulty::Easy.config());
    swipe.start(game.grid.tile(1).unwrap());
    assert!(swipe.extend(game.grid.tile(2).unwrap()));
    assert!(!swipe.set_operator(0, Operator::Multiply));
    assert_eq!(swipe.finish(), None);

    // Submitting the same path directly is refused as well
    let tiles = [*game.grid.tile(1).unwrap(), *game.grid.tile(2).unwrap()];
    assert!(!game.submit_solution(&tiles, &[Operator::Multiply]));
    assert_eq!(game.score(), 0);
}
