//
// This file is part of tictac.
//
// tictac is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tictac is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tictac. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2026 The tictac Developers
//

use rand::rngs::StdRng;
use rand::SeedableRng;

use tictac::agent::{NoInput, ScriptedInput};
use tictac::board::{Ply, CELLS};
use tictac::util::JKiss32Rng;
use tictac::{evaluate, new_game, Agent, Board, Difficulty, Game, Mark, Mode, State, Status};

/// Walks every board reachable from the empty board with `first` moving first.
fn walk(board: Board, to_move: Mark, visit: &mut dyn FnMut(&Board, Status)) {
    let status = evaluate(&board).expect("reachable boards are consistent");
    visit(&board, status);
    if status.is_terminal() {
        return;
    }

    for index in board.empty_cells() {
        let next = board.execute_ply(&Ply::new(to_move, index)).unwrap();
        walk(next, to_move.opponent(), visit);
    }
}

#[test]
fn every_reachable_board_has_exactly_one_status() {
    for &first in &[Mark::X, Mark::O] {
        let mut boards = 0;
        let mut wins = [0, 0];
        let mut draws = 0;

        walk(Board::new(), first, &mut |board, status| {
            boards += 1;
            assert!(!(board.has_line(Mark::X) && board.has_line(Mark::O)));
            assert!(board.validate().is_ok());
            match status {
                Status::Win(Mark::X) => wins[0] += 1,
                Status::Win(Mark::O) => wins[1] += 1,
                Status::Draw => {
                    assert!(board.is_full());
                    draws += 1;
                },
                Status::Ongoing => assert!(!board.is_full()),
            }
        });

        // Every sequence of plays, counted at each prefix.
        assert_eq!(boards, 549_946);
        // 255,168 complete games: 131,184 won by the first mover, 77,904 by the second.
        assert_eq!(draws, 46_080);
        let (first_wins, second_wins) = if first == Mark::X { (wins[0], wins[1]) } else { (wins[1], wins[0]) };
        assert_eq!(first_wins, 131_184);
        assert_eq!(second_wins, 77_904);
    }
}

#[test]
fn place_never_mutates_its_input() {
    let board: Board = "XO_/_X_/__O".parse().unwrap();
    let copy = board;

    for index in board.empty_cells().collect::<Vec<_>>() {
        let next = board.place_index(index, Mark::O);
        assert_eq!(board, copy);
        assert_eq!((0..CELLS).filter(|&i| next.cell(i) != board.cell(i)).count(), 1);
    }
}

#[test]
fn hard_against_hard_draws() {
    let (x, o) = new_game(Mode::MachineVsMachine, Some(Difficulty::Hard));
    let mut game = Game::new(x, o);
    let mut rng = JKiss32Rng::seed_from_u64(0);

    assert_eq!(game.play(&mut rng, &mut NoInput).unwrap(), Status::Draw);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn hard_never_loses() {
    for &difficulty in &[Difficulty::Easy, Difficulty::Medium] {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);

            let mut game = Game::new(Agent::machine(Mark::X, Difficulty::Hard), Agent::machine(Mark::O, difficulty));
            assert_ne!(game.play(&mut rng, &mut NoInput).unwrap(), Status::Win(Mark::O), "{:?} seed {}", difficulty, seed);

            let mut game = Game::new(Agent::machine(Mark::X, difficulty), Agent::machine(Mark::O, Difficulty::Hard));
            assert_ne!(game.play(&mut rng, &mut NoInput).unwrap(), Status::Win(Mark::X), "{:?} seed {}", difficulty, seed);
        }
    }
}

#[test]
fn seeded_games_replay() {
    let play = |seed| {
        let (x, o) = new_game(Mode::MachineVsMachine, Some(Difficulty::Medium));
        let mut game = Game::new(x, o);
        game.play(&mut JKiss32Rng::seed_from_u64(seed), &mut NoInput).unwrap();
        game.history().to_vec()
    };

    assert_eq!(play(11), play(11));
}

#[test]
fn human_against_hard() {
    let (x, o) = new_game(Mode::HumanVsMachine, Some(Difficulty::Hard));
    let mut game = Game::new(x, o);
    let mut rng = StdRng::seed_from_u64(0);
    // The machine answers the center in the corner, blocks twice, and then the human
    // (after one off-board answer) ignores the threat down the left column.
    let mut input = ScriptedInput::new(vec![4, 9, 1, 5, 8]);

    let status = game.play(&mut rng, &mut input).unwrap();

    assert_eq!(status, Status::Win(Mark::O));
    assert_eq!(input.rejected(), 1);
}
