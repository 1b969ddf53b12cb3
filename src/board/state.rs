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

use tracing::error;

use crate::analysis::{self, Evaluation as EvaluationTrait, Extrapolatable};
use crate::board::{Board, Mark, Ply, Resolution};
use crate::error::{Error, Result, Violation};
use crate::ply;
use crate::resolution;
use crate::state;

impl ply::Ply for Ply { }

impl resolution::Resolution for Resolution {
    fn is_win(&self) -> bool {
        matches!(*self, Resolution::Win(_))
    }

    fn is_draw(&self) -> bool {
        *self == Resolution::Draw
    }
}

impl state::State for Board {
    type Ply = Ply;
    type Resolution = Resolution;

    fn execute_ply_preallocated(&self, ply: &Ply, next: &mut Board) -> Result<()> {
        crate::agent::legal_move(self, ply.index)?;

        next.0 = self.0;
        next.0[ply.index] = Some(ply.mark);
        Ok(())
    }

    fn check_resolution(&self) -> Result<Option<Resolution>> {
        match (self.has_line(Mark::X), self.has_line(Mark::O)) {
            (true, true) => {
                error!(board = ?self.0, "both marks complete a line");
                Err(Error::InvariantViolation(Violation::DoubleWin))
            },
            (true, false) => Ok(Some(Resolution::Win(Mark::X))),
            (false, true) => Ok(Some(Resolution::Win(Mark::O))),
            (false, false) => if self.is_full() {
                Ok(Some(Resolution::Draw))
            } else {
                Ok(None)
            },
        }
    }
}

impl Extrapolatable<usize> for Board {
    fn extrapolate_into(&self, cells: &mut Vec<usize>) {
        cells.extend(self.empty_cells());
    }
}

/// A minimax score from the point of view of one mark.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Score(pub i8);

prepare_evaluation_tuple!(Score); // impl Add, Neg, and Display

impl analysis::Evaluation for Score {
    fn null() -> Score { Score(0) }
    fn shift(self, steps: i32) -> Score { self + Score(steps as i8) }
    fn win() -> Score { Score(10) }
    fn max() -> Score { Score(i8::MAX) }
    fn is_win(&self) -> bool { self.0 > 0 }
}

/// Scores finished boards for `mark`.
///
/// A win for `mark` is worth `10 - depth`, a win for the opponent `depth - 10`, and a full board
/// with no line `0`, so that faster wins and slower losses are preferred.
#[derive(Clone, Copy, Debug)]
pub struct TerminalEvaluator {
    pub mark: Mark,
}

impl analysis::Evaluator for TerminalEvaluator {
    type State = Board;
    type Evaluation = Score;

    fn evaluate(&self, board: &Board, depth: u8) -> Option<Score> {
        if board.has_line(self.mark) {
            Some(Score::win().shift(-(depth as i32)))
        } else if board.has_line(self.mark.opponent()) {
            Some(Score::lose().shift(depth as i32))
        } else if board.is_full() {
            Some(Score::null())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use crate::board::{Board, Mark, Ply, Resolution};
    use crate::error::{Error, IllegalReason};
    use crate::resolution::Resolution as ResolutionTrait;
    use crate::state::State;

    #[test]
    fn test_execute_ply() {
        let board = Board::new();
        let next = board.execute_ply(&Ply::new(Mark::X, 4)).unwrap();
        assert_eq!(next.cell(4), Some(Mark::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_execute_illegal_ply() {
        let board: Board = "X__/___/___".parse().unwrap();

        match board.execute_ply(&Ply::new(Mark::O, 0)) {
            Err(Error::IllegalMove { index: 0, reason: IllegalReason::Occupied }) => (),
            other => panic!("expected an occupied cell, got {:?}", other),
        }

        match board.execute_ply(&Ply::new(Mark::O, 12)) {
            Err(Error::IllegalMove { index: 12, reason: IllegalReason::OutOfRange }) => (),
            other => panic!("expected an out of range cell, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_plies() {
        let plies = [
            Ply::new(Mark::X, 0),
            Ply::new(Mark::O, 3),
            Ply::new(Mark::X, 1),
            Ply::new(Mark::O, 4),
            Ply::new(Mark::X, 2),
        ];
        let board = Board::new().execute_plies(&plies).unwrap();
        let resolution = board.check_resolution().unwrap().unwrap();

        assert_eq!(resolution, Resolution::Win(Mark::X));
        assert!(resolution.is_win());
        assert!(!resolution.is_draw());
    }
}

#[cfg(test)]
mod evaluator_test {
    use crate::analysis::{Evaluation, Evaluator, Extrapolatable};
    use crate::board::{Board, Mark};
    use super::{Score, TerminalEvaluator};

    #[test]
    fn test_terminal_scores() {
        let won: Board = "XXX/OO_/___".parse().unwrap();
        let x = TerminalEvaluator { mark: Mark::X };
        let o = TerminalEvaluator { mark: Mark::O };

        assert_eq!(x.evaluate(&won, 5), Some(Score(5)));
        assert_eq!(o.evaluate(&won, 5), Some(Score(-5)));
        assert_eq!(x.evaluate(&"XOX/XOO/OXX".parse().unwrap(), 9), Some(Score::null()));
        assert_eq!(x.evaluate(&Board::new(), 0), None);
    }

    #[test]
    fn test_score_ordering() {
        assert!(Score::win().shift(-1) > Score::win().shift(-3));
        assert!(Score::lose().shift(3) > Score::lose().shift(1));
        assert!(Score::min() < Score::lose());
        assert!(Score::max() > Score::win());
        assert_eq!(Score::max(), -Score::min());
        assert!(Score(4).is_win());
        assert!(Score(-4).is_lose());
        assert!(!Score::null().is_end());
        assert_eq!(format!("{}", -Score(7)), "-7");
    }

    #[test]
    fn test_extrapolate_in_index_order() {
        let board: Board = "X_O/_X_/O__".parse().unwrap();
        assert_eq!(board.extrapolate(), vec![1, 3, 5, 7, 8]);
    }
}
