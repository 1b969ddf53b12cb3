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

//! Error types.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::board::CELLS;

/// Why a cell index was refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IllegalReason {
    /// The index does not name one of the nine cells.
    OutOfRange,
    /// The cell already holds a mark.
    Occupied,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IllegalReason::OutOfRange => write!(f, "cell must be between 0 and {}", CELLS - 1),
            IllegalReason::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

/// A board that legal play could never produce, or a request that makes no sense on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Violation {
    /// Both marks complete a line.
    DoubleWin,
    /// The mark counts differ by more than one.
    MarkImbalance { x: usize, o: usize },
    /// A strategy was asked to move on a board that is already won or full.
    TerminalBoard,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Violation::DoubleWin => write!(f, "both marks complete a line"),
            Violation::MarkImbalance { x, o } => write!(f, "mark counts X={} O={} differ by more than one", x, o),
            Violation::TerminalBoard => write!(f, "the board is already resolved"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("illegal move {index}: {reason}")]
    IllegalMove { index: usize, reason: IllegalReason },

    #[error("invariant violation: {0}")]
    InvariantViolation(Violation),

    #[error("could not parse board '{input}': {message}")]
    Parse { input: String, message: String },

    #[error("input failed: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns `true` if the error can be answered by asking for another move.
    pub fn is_recoverable(&self) -> bool {
        matches!(*self, Error::IllegalMove { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
