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

//! Turn alternation.

use rand::Rng;
use tracing::{debug, info};

use crate::agent::{Agent, MoveInput};
use crate::board::{self, Board, Ply, Status};
use crate::error::Result;
use crate::state::State;

/// A game in progress: the authoritative board, the two agents, and every ply played so far.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    agents: [Agent; 2],
    history: Vec<Ply>,
}

impl Game {
    /// Starts a game on an empty board.  `first` moves first.
    pub fn new(first: Agent, second: Agent) -> Game {
        debug_assert!(first.mark() != second.mark(), "both agents play {}", first.mark());
        info!(first = %first, second = %second, "new game");

        Game {
            board: Board::new(),
            agents: [first, second],
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Ply] {
        &self.history
    }

    /// The agent whose turn it is.
    pub fn next_agent(&self) -> &Agent {
        &self.agents[self.history.len() % 2]
    }

    pub fn status(&self) -> Result<Status> {
        board::evaluate(&self.board)
    }

    /// Asks the agent to move for one ply and applies it.  Does nothing on a finished game.
    pub fn step<R, I>(&mut self, rng: &mut R, input: &mut I) -> Result<Status> where
        R: Rng + ?Sized,
        I: MoveInput + ?Sized {
        let status = self.status()?;
        if status.is_terminal() {
            return Ok(status);
        }

        let agent = *self.next_agent();
        let index = agent.decide(&self.board, rng, input)?;
        let ply = Ply::new(agent.mark(), index);

        self.board = self.board.execute_ply(&ply)?;
        self.history.push(ply);
        debug!(%ply, plies = self.history.len(), "ply executed");

        let status = self.status()?;
        if status.is_terminal() {
            info!(%status, plies = self.history.len(), "game over");
        }
        Ok(status)
    }

    /// Plays until the board is won or full.
    pub fn play<R, I>(&mut self, rng: &mut R, input: &mut I) -> Result<Status> where
        R: Rng + ?Sized,
        I: MoveInput + ?Sized {
        loop {
            let status = self.step(rng, input)?;
            if status.is_terminal() {
                return Ok(status);
            }
        }
    }
}
