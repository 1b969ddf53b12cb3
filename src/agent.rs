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

//! The players.
//!
//! An `Agent` owns a mark and a `Strategy`, and answers one question through `decide`: given
//! this board, which cell?  Every answer, whoever produced it, satisfies `legal_move`.

use std::collections::VecDeque;
use std::fmt;
use std::io;

use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::analysis::{heuristic, Heuristic, Minimax, Search};
use crate::board::{self, Board, Mark, CELLS};
use crate::error::{Error, IllegalReason, Result};

/// How strong the artificial opponent plays.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// The rule-ordered heuristic.
    Medium,
    /// Exhaustive alpha-beta search.
    Hard,
}

/// Who sits at the board.  The first agent plays X and moves first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Mode {
    HumanVsHuman,
    HumanVsMachine,
    MachineVsMachine,
}

/// How an agent picks its cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Waits on a `MoveInput`.
    Human,
    Random,
    Heuristic,
    Search,
}

impl From<Difficulty> for Strategy {
    fn from(difficulty: Difficulty) -> Strategy {
        match difficulty {
            Difficulty::Easy => Strategy::Random,
            Difficulty::Medium => Strategy::Heuristic,
            Difficulty::Hard => Strategy::Search,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Strategy::Human => "human",
            Strategy::Random => "random",
            Strategy::Heuristic => "heuristic",
            Strategy::Search => "search",
        })
    }
}

/// The source of a human agent's moves, usually a console.
pub trait MoveInput {
    /// Blocks until a cell index is supplied for `mark`.  The index is not yet validated.
    fn request_move(&mut self, board: &Board, mark: Mark) -> Result<usize>;

    /// Called when a supplied index was refused.  The next `request_move` asks again.
    fn reject(&mut self, _error: &Error) -> Result<()> {
        Ok(())
    }
}

/// Input for games without human agents.  Any request fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInput;

impl MoveInput for NoInput {
    fn request_move(&mut self, _board: &Board, mark: Mark) -> Result<usize> {
        Err(Error::Io(io::Error::new(io::ErrorKind::Unsupported, format!("no input available for {}", mark))))
    }
}

/// Input that replays a fixed list of indices, then runs dry.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    moves: VecDeque<usize>,
    rejected: usize,
}

impl ScriptedInput {
    pub fn new<I>(moves: I) -> ScriptedInput where
        I: IntoIterator<Item = usize> {
        ScriptedInput {
            moves: moves.into_iter().collect(),
            rejected: 0,
        }
    }

    /// The number of indices that were refused so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl MoveInput for ScriptedInput {
    fn request_move(&mut self, _board: &Board, _mark: Mark) -> Result<usize> {
        self.moves.pop_front().ok_or_else(|| {
            Error::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted"))
        })
    }

    fn reject(&mut self, _error: &Error) -> Result<()> {
        self.rejected += 1;
        Ok(())
    }
}

/// Checks that `index` names an empty cell of `board`.
///
/// This is the single legality test shared by every strategy and by `State::execute_ply`.
pub fn legal_move(board: &Board, index: usize) -> Result<()> {
    if index >= CELLS {
        Err(Error::IllegalMove { index, reason: IllegalReason::OutOfRange })
    } else if board.cell(index).is_some() {
        Err(Error::IllegalMove { index, reason: IllegalReason::Occupied })
    } else {
        Ok(())
    }
}

/// A mark and the strategy that plays it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Agent {
    mark: Mark,
    strategy: Strategy,
}

impl Agent {
    pub fn new(mark: Mark, strategy: Strategy) -> Agent {
        Agent { mark, strategy }
    }

    pub fn human(mark: Mark) -> Agent {
        Agent::new(mark, Strategy::Human)
    }

    pub fn machine(mark: Mark, difficulty: Difficulty) -> Agent {
        Agent::new(mark, difficulty.into())
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn is_human(&self) -> bool {
        self.strategy == Strategy::Human
    }

    /// Chooses a cell on `board`.
    ///
    /// `rng` feeds the random and heuristic strategies, and `input` the human one.  A human's
    /// illegal answers are rejected through `MoveInput::reject` and asked again; the index
    /// returned is always legal.  Fails if the board is already resolved.
    #[instrument(level = "debug", skip(self, board, rng, input), fields(mark = %self.mark, strategy = %self.strategy))]
    pub fn decide<R, I>(&self, board: &Board, rng: &mut R, input: &mut I) -> Result<usize> where
        R: Rng + ?Sized,
        I: MoveInput + ?Sized {
        let index = match self.strategy {
            Strategy::Human => {
                board::ensure_ongoing(board)?;
                loop {
                    let index = input.request_move(board, self.mark)?;
                    match legal_move(board, index) {
                        Ok(()) => break index,
                        Err(error) => {
                            warn!(%error, "rejected move");
                            input.reject(&error)?;
                        },
                    }
                }
            },
            Strategy::Random => heuristic::random_cell(board, rng)?,
            Strategy::Heuristic => Heuristic::new(self.mark).choose(board, rng)?.0,
            Strategy::Search => {
                let analysis = Minimax::new(self.mark).search(board)?;
                debug!(evaluation = %analysis.evaluation, statistics = %analysis.statistics, "search result");
                analysis.ply.index
            },
        };

        debug_assert!(legal_move(board, index).is_ok());
        debug!(index, "decided");
        Ok(index)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.mark, self.strategy)
    }
}

/// Seats two agents for `mode`.  The first plays X and moves first.
///
/// Machines play at `difficulty`, or `Easy` if none is given.  In `HumanVsMachine` the human
/// takes X.
pub fn new_game(mode: Mode, difficulty: Option<Difficulty>) -> (Agent, Agent) {
    let difficulty = difficulty.unwrap_or(Difficulty::Easy);

    match mode {
        Mode::HumanVsHuman => (Agent::human(Mark::X), Agent::human(Mark::O)),
        Mode::HumanVsMachine => (Agent::human(Mark::X), Agent::machine(Mark::O, difficulty)),
        Mode::MachineVsMachine => (Agent::machine(Mark::X, difficulty), Agent::machine(Mark::O, difficulty)),
    }
}
