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

//! The rule-ordered move selector behind the medium opponent.
//!
//! The rules are tried from first to last, and each one scans the empty cells in increasing
//! index order.  The first cell to satisfy a rule is played:
//!
//! 1. `Win`: the cell completes a line for the heuristic's own mark.
//! 2. `Block`: the cell would complete a line for the opponent.
//! 3. `BuildTwo`: after placing the own mark, some line holds two own marks and no opponent mark.
//! 4. `BlockTwo`: the same test made for the opponent's mark.
//! 5. `Random`: any empty cell, chosen uniformly.
//!
//! This is far from perfect play, which is the point.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::analysis::Extrapolatable;
use crate::board::{self, Board, Mark, LINES};
use crate::error::{Error, Result, Violation};

/// The rule that produced a heuristic choice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    Win,
    Block,
    BuildTwo,
    BlockTwo,
    Random,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Rule::Win => "win",
            Rule::Block => "block",
            Rule::BuildTwo => "build two",
            Rule::BlockTwo => "block two",
            Rule::Random => "random",
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Heuristic {
    mark: Mark,
}

impl Heuristic {
    pub fn new(mark: Mark) -> Heuristic {
        Heuristic { mark }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Picks a cell for `board`, along with the rule that picked it.
    ///
    /// Only the final fallback consumes randomness.
    pub fn choose<R>(&self, board: &Board, rng: &mut R) -> Result<(usize, Rule)> where
        R: Rng + ?Sized {
        board::ensure_ongoing(board)?;

        let cells = board.extrapolate();
        let own = self.mark;
        let opponent = self.mark.opponent();

        let rules: [(Rule, Mark, fn(&Board, Mark) -> bool); 4] = [
            (Rule::Win, own, Board::has_line),
            (Rule::Block, opponent, Board::has_line),
            (Rule::BuildTwo, own, has_open_two),
            (Rule::BlockTwo, opponent, has_open_two),
        ];

        for &(rule, mark, test) in rules.iter() {
            if let Some(&index) = cells.iter().find(|&&index| test(&board.place_index(index, mark), mark)) {
                debug!(mark = %own, index, %rule, "heuristic choice");
                return Ok((index, rule));
            }
        }

        let index = pick_empty(&cells, rng)?;
        debug!(mark = %own, index, rule = %Rule::Random, "heuristic choice");
        Ok((index, Rule::Random))
    }
}

/// Returns `true` if some line holds exactly two of `mark` and none of the opponent's.
pub fn has_open_two(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| {
        board.count_in_line(line, mark) == 2 && board.count_in_line(line, mark.opponent()) == 0
    })
}

/// Picks an empty cell uniformly at random.  Fails if the board is already resolved.
pub fn random_cell<R>(board: &Board, rng: &mut R) -> Result<usize> where
    R: Rng + ?Sized {
    board::ensure_ongoing(board)?;
    pick_empty(&board.extrapolate(), rng)
}

fn pick_empty<R>(cells: &[usize], rng: &mut R) -> Result<usize> where
    R: Rng + ?Sized {
    cells.choose(rng)
        .copied()
        .ok_or(Error::InvariantViolation(Violation::TerminalBoard))
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn choose(board: &str, mark: Mark) -> (usize, Rule) {
        let mut rng = StdRng::seed_from_u64(0);
        Heuristic::new(mark).choose(&board.parse().unwrap(), &mut rng).unwrap()
    }

    #[test]
    fn test_win_before_block() {
        // X can complete the top row at 2 or stop O's middle row at 5.
        assert_eq!(choose("XX_/OO_/___", Mark::X), (2, Rule::Win));
    }

    #[test]
    fn test_block() {
        assert_eq!(choose("XX_/O__/__O", Mark::O), (2, Rule::Block));
    }

    #[test]
    fn test_lowest_index_wins_within_a_rule() {
        // O can win at 5 or 7; it takes 5.
        assert_eq!(choose("XOX/OO_/X__", Mark::O), (5, Rule::Win));
    }

    #[test]
    fn test_build_two() {
        assert_eq!(choose("X__/_O_/___", Mark::X), (1, Rule::BuildTwo));
    }

    #[test]
    fn test_build_two_ignores_blocked_lines() {
        // Playing 2 puts two X in the top row, but O already sits in it.  The first open
        // line comes from 3, down the left column.
        assert_eq!(choose("XO_/___/___", Mark::X), (3, Rule::BuildTwo));
    }

    #[test]
    fn test_block_two() {
        // Nothing X can play makes an open two, but O at 0 would line up with the center.
        assert_eq!(choose("___/_O_/___", Mark::X), (0, Rule::BlockTwo));
    }

    #[test]
    fn test_random_fallback() {
        let board = Board::new();
        let mut seen = [false; 9];

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (index, rule) = Heuristic::new(Mark::X).choose(&board, &mut rng).unwrap();
            assert_eq!(rule, Rule::Random);
            seen[index] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_fallback_is_reproducible() {
        let board = Board::new();
        let a = Heuristic::new(Mark::O).choose(&board, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Heuristic::new(Mark::O).choose(&board, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_cell_is_empty() {
        let board: Board = "XO_/OX_/XO_".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(board.is_empty_cell(random_cell(&board, &mut rng).unwrap()));
        }
    }

    #[test]
    fn test_has_open_two() {
        assert!(has_open_two(&"XX_/___/___".parse().unwrap(), Mark::X));
        assert!(!has_open_two(&"XXO/___/___".parse().unwrap(), Mark::X));
        assert!(!has_open_two(&"XXX/___/___".parse().unwrap(), Mark::X));
        assert!(has_open_two(&"X__/_X_/___".parse().unwrap(), Mark::X));
    }

    #[test]
    fn test_terminal_board_is_refused() {
        let mut rng = StdRng::seed_from_u64(0);
        let won: Board = "OOO/XX_/___".parse().unwrap();
        assert!(Heuristic::new(Mark::X).choose(&won, &mut rng).is_err());

        // Empty cells remain, but the game is over.
        match random_cell(&won, &mut rng) {
            Err(Error::InvariantViolation(Violation::TerminalBoard)) => (),
            other => panic!("expected a terminal board violation, got {:?}", other),
        }
    }
}
