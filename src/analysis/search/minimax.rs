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

use tracing::{debug, trace};

use crate::analysis::{Analysis, Evaluation, Evaluator, Extrapolatable, Search, Statistics};
use crate::board::{self, Board, Mark, Ply, Score, TerminalEvaluator};
use crate::error::{Error, Result, Violation};

/// Exhaustive minimax search with alpha-beta pruning.
///
/// The searching mark maximizes and its opponent minimizes.  Children are always tried in
/// increasing cell order, and at the root the first cell with the best score is chosen, so
/// ties go to the lowest index.
///
/// With nine cells the whole tree fits comfortably in a plain recursive search: there is no
/// depth limit, transposition table, or iterative deepening.
pub struct Minimax {
    mark: Mark,
    evaluator: TerminalEvaluator,
    statistics: Statistics,
}

impl Minimax {
    pub fn new(mark: Mark) -> Minimax {
        Minimax {
            mark,
            evaluator: TerminalEvaluator { mark },
            statistics: Statistics::default(),
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    fn minimax(&mut self, board: &Board, depth: u8, maximizing: bool, mut alpha: Score, mut beta: Score) -> Score {
        self.statistics.nodes += 1;

        if let Some(score) = self.evaluator.evaluate(board, depth) {
            return score;
        }

        if maximizing {
            let mut best = Score::min();
            for index in board.empty_cells() {
                let next = board.place_index(index, self.mark);
                let value = self.minimax(&next, depth + 1, false, alpha, beta);
                if value > best {
                    best = value;
                }
                if best > alpha {
                    alpha = best;
                }
                if beta <= alpha {
                    self.statistics.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = Score::max();
            for index in board.empty_cells() {
                let next = board.place_index(index, self.mark.opponent());
                let value = self.minimax(&next, depth + 1, true, alpha, beta);
                if value < best {
                    best = value;
                }
                if best < beta {
                    beta = best;
                }
                if beta <= alpha {
                    self.statistics.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

impl Search<Board> for Minimax {
    type Evaluation = Score;

    fn search(&mut self, board: &Board) -> Result<Analysis<Board, Score>> {
        board::ensure_ongoing(board)?;

        self.statistics = Statistics::default();

        let mut best: Option<(Ply, Score)> = None;
        let mut candidates = Vec::new();

        for index in board.extrapolate() {
            let ply = Ply::new(self.mark, index);
            let next = board.place_index(index, self.mark);
            let score = self.minimax(&next, 1, false, Score::min(), Score::max());

            trace!(%ply, %score, "candidate");
            candidates.push((ply, score));

            // Strictly greater, so the lowest index keeps ties.
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((ply, score));
            }
        }

        let (ply, evaluation) = best.ok_or(Error::InvariantViolation(Violation::TerminalBoard))?;

        debug!(%ply, %evaluation, statistics = %self.statistics, "search complete");

        Ok(Analysis {
            state: *board,
            ply,
            evaluation,
            candidates,
            statistics: self.statistics,
        })
    }
}
