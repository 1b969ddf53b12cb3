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

//! The game of tic-tac-toe.

use crate::error::{Error, Result, Violation};
use crate::state::State;

/// The number of cells on the board.
pub const CELLS: usize = 9;

/// Every winning triple of cell indices: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Either X or O.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match *self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// The placement of a mark in an empty cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Ply {
    pub mark: Mark,
    /// Row-major cell index, `row * 3 + col`.
    pub index: usize,
}

impl Ply {
    pub fn new(mark: Mark, index: usize) -> Ply {
        Ply { mark, index }
    }

    /// Returns `(row, col)`.
    pub fn coordinates(&self) -> (usize, usize) {
        (self.index / 3, self.index % 3)
    }
}

/// Either a win or a draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    Win(Mark),
    Draw,
}

/// The classification of a board: still in play, won, or drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ongoing,
    Win(Mark),
    Draw,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        *self != Status::Ongoing
    }
}

impl From<Option<Resolution>> for Status {
    fn from(resolution: Option<Resolution>) -> Status {
        match resolution {
            Some(Resolution::Win(mark)) => Status::Win(mark),
            Some(Resolution::Draw) => Status::Draw,
            None => Status::Ongoing,
        }
    }
}

/// The 3x3 game board, stored row-major.  `None` is an empty cell.
///
/// `Board` is a plain value: every placement produces a new board and leaves the original
/// untouched.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Board(pub [Option<Mark>; CELLS]);

impl Board {
    /// Creates an empty board.
    pub fn new() -> Board {
        Board([None; CELLS])
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.0[index]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.0[row * 3 + col]
    }

    /// Returns `true` if `index` names a cell on the board and that cell is empty.
    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < CELLS && self.0[index].is_none()
    }

    /// The indices of the empty cells, in increasing order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().filter_map(|(index, cell)| if cell.is_none() {
            Some(index)
        } else {
            None
        })
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// Counts the cells of `line` holding `mark`.
    pub fn count_in_line(&self, line: &[usize; 3], mark: Mark) -> usize {
        line.iter().filter(|&&index| self.0[index] == Some(mark)).count()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| cell.is_some())
    }

    /// Returns `true` if any row, column or diagonal is entirely `mark`.
    pub fn has_line(&self, mark: Mark) -> bool {
        LINES.iter().any(|line| self.count_in_line(line, mark) == 3)
    }

    /// Returns a copy of the board with `(row, col)` set to `mark`.
    ///
    /// The cell must be empty.  This is not checked in release builds; use
    /// `State::execute_ply` for a checked placement.
    pub fn place(&self, row: usize, col: usize, mark: Mark) -> Board {
        debug_assert!(row < 3 && col < 3, "cell ({}, {}) is off the board", row, col);
        self.place_index(row * 3 + col, mark)
    }

    /// Returns a copy of the board with cell `index` set to `mark`.  The cell must be empty.
    pub fn place_index(&self, index: usize, mark: Mark) -> Board {
        debug_assert!(self.is_empty_cell(index), "cell {} is not an empty cell", index);
        let mut next = *self;
        next.0[index] = Some(mark);
        next
    }

    /// Returns the mark that moves next, given the mark that moved first.
    pub fn next_mark(&self, first: Mark) -> Mark {
        if self.count(first) > self.count(first.opponent()) {
            first.opponent()
        } else {
            first
        }
    }

    /// Checks that the board could have been reached by alternating play.
    pub fn validate(&self) -> Result<()> {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        if x.abs_diff(o) > 1 {
            return Err(Error::InvariantViolation(Violation::MarkImbalance { x, o }));
        }
        self.check_resolution().map(|_| ())
    }
}

/// Classifies `board` as ongoing, won, or drawn.
///
/// A board on which both marks complete a line is reported as an invariant violation.
pub fn evaluate(board: &Board) -> Result<Status> {
    board.check_resolution().map(Status::from)
}

/// Fails unless `board` is still in play.  Strategies call this once on entry.
pub fn ensure_ongoing(board: &Board) -> Result<()> {
    if evaluate(board)?.is_terminal() {
        Err(Error::InvariantViolation(Violation::TerminalBoard))
    } else {
        Ok(())
    }
}

pub use self::state::{Score, TerminalEvaluator};

mod display;
mod state;
