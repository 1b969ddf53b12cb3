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

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// This trait marks a ply.
///
/// A ply is a single move made by a single player.  For tic-tac-toe it is the placement of a
/// mark in an empty cell.
///
/// # Example
///
/// ```rust
/// # use tictac::Ply;
/// # #[derive(Clone, Copy, Debug, Hash, PartialEq)]
/// enum Mark { X, O }
///
/// # #[derive(Clone, Debug, Hash, PartialEq)]
/// struct Move {
///     mark: Mark,
///     index: usize,
/// }
///
/// impl Ply for Move { }
/// # impl std::fmt::Display for Move { fn fmt(&self, _: &mut std::fmt::Formatter) -> std::fmt::Result { Ok(()) } }
/// ```
pub trait Ply: Clone + Debug + Display + Hash + PartialEq { }
