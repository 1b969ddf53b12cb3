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

//! Move selection: legal-move generation, the heuristic cascade, and game-tree search.

pub use self::evaluation::Evaluation;
pub use self::evaluator::Evaluator;
pub use self::heuristic::{Heuristic, Rule};
pub use self::search::{Analysis, Minimax, Search, Statistics};

/// Generates the plies available from a state.
pub trait Extrapolatable<P> {
    /// Appends every available ply to `plies`, in a fixed order.
    fn extrapolate_into(&self, plies: &mut Vec<P>);

    /// Returns every available ply, in a fixed order.
    fn extrapolate(&self) -> Vec<P> {
        let mut plies = Vec::new();
        self.extrapolate_into(&mut plies);
        plies
    }
}

#[macro_use]
mod evaluation;
mod evaluator;
pub mod heuristic;
pub mod search;
