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

//! A tic-tac-toe engine with artificial opponents.
//!
//! The crate is built around three small traits, `Ply`, `Resolution`, and `State`, which
//! describe a two-player game in general terms.  The `board` module implements them for a 3x3
//! tic-tac-toe board, and the `analysis` module provides the move-selection machinery that the
//! artificial opponents are built from:
//!
//! * a rule-ordered heuristic (win now, block now, build two, block two, random fallback)
//! * an exhaustive minimax search with alpha-beta pruning
//!
//! An `Agent` pairs a mark with one of the strategies (human, random, heuristic or search) and
//! answers a single question: given this board, which cell?  The `Game` type alternates two
//! agents until the board is resolved.
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use tictac::{new_game, Difficulty, Game, Mode, Status};
//! use tictac::agent::NoInput;
//! use tictac::util::JKiss32Rng;
//!
//! let mut rng = JKiss32Rng::seed_from_u64(7);
//! let (x, o) = new_game(Mode::MachineVsMachine, Some(Difficulty::Hard));
//! let mut game = Game::new(x, o);
//!
//! assert_eq!(game.play(&mut rng, &mut NoInput).unwrap(), Status::Draw);
//! ```

#[macro_use]
pub mod analysis;

pub mod agent;
pub mod board;
pub mod error;
pub mod game;
pub mod util;

pub use self::agent::{legal_move, new_game, Agent, Difficulty, Mode, Strategy};
pub use self::board::{evaluate, Board, Mark, Status};
pub use self::error::{Error, Result};
pub use self::game::Game;
pub use self::ply::Ply;
pub use self::resolution::Resolution;
pub use self::state::State;

mod ply;
mod resolution;
mod state;
