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

/// A game's resolution.
///
/// This is often an `enum` that represents each ending a game can have.
///
/// # Example
///
/// For tic-tac-toe, we might have:
///
/// ```rust
/// # use tictac::Resolution;
/// # #[derive(PartialEq)]
/// enum Mark { X, O }
///
/// # #[derive(PartialEq)]
/// enum End {
///     Win(Mark),
///     Draw,
/// }
///
/// impl Resolution for End {
///     fn is_win(&self) -> bool { matches!(*self, End::Win(_)) }
///     fn is_draw(&self) -> bool { *self == End::Draw }
/// }
/// ```
pub trait Resolution {
    fn is_win(&self) -> bool;
    fn is_draw(&self) -> bool;
}
