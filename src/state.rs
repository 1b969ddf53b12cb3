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

use std::fmt::Display;
use std::hash::Hash;

use crate::error::Result;
use crate::{Ply, Resolution};

/// The state of the game.
///
/// This should represent everything that makes up a single moment of the game.  For
/// tic-tac-toe that is just the nine cells; whose turn it is follows from the marks on the
/// board and the mark that moved first.
///
/// # Example
///
/// ```rust
/// # use tictac::{Board, Mark, State};
/// # use tictac::board::Ply;
/// let board = Board::new();
/// let next = board.execute_ply(&Ply::new(Mark::X, 4)).unwrap();
///
/// assert!(board.execute_ply(&Ply::new(Mark::O, 9)).is_err());
/// assert!(next.execute_ply(&Ply::new(Mark::O, 4)).is_err());
/// assert!(next.check_resolution().unwrap().is_none());
/// ```
pub trait State: Clone + Display + Eq + Hash + PartialEq {
    type Ply: Ply;
    type Resolution: Resolution;

    /// Executes a ply on the state, storing the resultant state in the preallocated `next`.
    /// Implementors must validate the ply and leave `next` untouched if it is illegal.
    fn execute_ply_preallocated(&self, ply: &Self::Ply, next: &mut Self) -> Result<()>;

    /// Returns `None` if the game has not reached a conclusion, or an error if the state
    /// could never have been reached by legal play.
    fn check_resolution(&self) -> Result<Option<Self::Resolution>>;

    /// Clones the state and then calls `execute_ply_preallocated`.
    fn execute_ply(&self, ply: &Self::Ply) -> Result<Self> {
        let mut next = self.clone();
        self.execute_ply_preallocated(ply, &mut next)?;
        Ok(next)
    }

    /// Executes each ply in `plies` on the result of the previous ply.
    fn execute_plies(&self, plies: &[Self::Ply]) -> Result<Self> {
        let mut state = self.clone();
        for ply in plies {
            state = state.execute_ply(ply)?;
        }
        Ok(state)
    }
}
