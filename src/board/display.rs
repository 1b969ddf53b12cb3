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

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Mark, Ply, Resolution, Status, CELLS};
use crate::error::Error;

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {:?}", self.mark, self.coordinates())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Resolution::Win(mark) => write!(f, "{} wins", mark),
            Resolution::Draw => write!(f, "draw"),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Status::Ongoing => write!(f, "ongoing"),
            Status::Win(mark) => write!(f, "{} wins", mark),
            Status::Draw => write!(f, "draw"),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   0 1 2")?;
        for row in 0..3 {
            write!(f, "\n{} |", row)?;
            for col in 0..3 {
                match self.get(row, col) {
                    Some(mark) => write!(f, "{}|", mark)?,
                    None => write!(f, " |")?,
                }
            }
        }
        Ok(())
    }
}

/// Parses a board written row by row, e.g. `"XX_/OO_/___"`.
///
/// Rows may be separated by `/` or newlines, or not at all.  `X` and `O` (either case) are
/// marks; `_`, `.`, and `-` are empty cells.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Board, Error> {
        let parse_error = |message: String| Error::Parse {
            input: s.to_string(),
            message,
        };

        let mut board = Board::new();
        let mut index = 0;

        for c in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            if index >= CELLS {
                return Err(parse_error(format!("more than {} cells", CELLS)));
            }

            board.0[index] = match c {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '_' | '.' | '-' => None,
                _ => return Err(parse_error(format!("unexpected character '{}' at cell {}", c, index))),
            };
            index += 1;
        }

        if index < CELLS {
            return Err(parse_error(format!("expected {} cells, found {}", CELLS, index)));
        }

        Ok(board)
    }
}
