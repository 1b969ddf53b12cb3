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

//! Tools for searching the game tree.

use std::fmt;

use crate::analysis::Evaluation;
use crate::error::Result;
use crate::state::State;

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Statistics {
    /// Positions visited, terminal or not, below the root.
    pub nodes: u64,
    /// Sibling lists abandoned once `beta <= alpha`.
    pub cutoffs: u64,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} nodes, {} cutoffs", self.nodes, self.cutoffs)
    }
}

/// The result of a search.
#[derive(Clone, Debug)]
pub struct Analysis<S, E> where
    S: State,
    E: Evaluation {
    /// The state on which the search was performed.
    pub state: S,
    /// The chosen ply.
    pub ply: S::Ply,
    /// The evaluation of the chosen ply, which is the evaluation of `state`.
    pub evaluation: E,
    /// Every candidate ply in the order it was tried, with its evaluation.
    pub candidates: Vec<(S::Ply, E)>,
    pub statistics: Statistics,
}

/// Provides search capabilities.
pub trait Search<S> where
    S: State {
    type Evaluation: Evaluation;

    /// Generates an analysis of `state`.  Fails if `state` is already resolved.
    fn search(&mut self, state: &S) -> Result<Analysis<S, Self::Evaluation>>;
}

impl<S, E> fmt::Display for Analysis<S, E> where
    S: State,
    E: Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "State:\n{}", self.state)?;
        writeln!(f, "Evaluation: {}{}", self.evaluation, if self.evaluation.is_win() {
            " (win)"
        } else if self.evaluation.is_lose() {
            " (loss)"
        } else {
            ""
        })?;
        writeln!(f, "Ply: {}", self.ply)?;
        write!(f, "Candidates:")?;
        for (ply, evaluation) in &self.candidates {
            write!(f, "\n  {}: {}", ply, evaluation)?;
        }
        write!(f, "\nStatistics: {}", self.statistics)
    }
}

pub use self::minimax::Minimax;

mod minimax;
