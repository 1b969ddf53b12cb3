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

use crate::analysis::Evaluation;
use crate::state::State;

/// Scores the end of a line of play.
///
/// The search only ever asks about positions it has reached by placing marks, so the evaluator
/// is told how many plies deep the position lies and returns `None` while play continues.
pub trait Evaluator {
    type State: State;
    type Evaluation: Evaluation;

    /// Returns the evaluation of `state` if it is terminal, `depth` plies below the root.
    fn evaluate(&self, state: &Self::State, depth: u8) -> Option<Self::Evaluation>;
}
