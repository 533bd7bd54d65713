//! Gomoku-specific trait implementations for the proof search.

use crate::board::{Board, Color, Point};
use crate::evaluate;
use crate::proof_searcher::{
    solve, Evaluator, GameState, MoveGenerator, SearchContext, SearchError, SearchOutcome, Verdict,
};

impl GameState for Board {
    type Move = Point;

    #[inline]
    fn apply_move(&mut self, point: Point, color: Color) -> bool {
        self.play_move(point, color).is_ok()
    }

    #[inline]
    fn check_game_end(&self) -> Option<Color> {
        Board::check_game_end(self)
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct GomokuMoveGenerator;

impl MoveGenerator<Board> for GomokuMoveGenerator {
    #[inline]
    fn generate_moves(&self, state: &Board) -> Vec<Point> {
        state.legal_moves()
    }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct GomokuEvaluator;

impl Evaluator<Board> for GomokuEvaluator {
    #[inline]
    fn evaluate(&self, state: &Board, has_legal_moves: bool) -> Verdict {
        evaluate::static_verdict(state, has_legal_moves)
    }
}

/// Proves whether `color` can force a win from the given position.
#[must_use = "solve returns the proven outcome"]
pub fn solve_position(
    context: &mut SearchContext<Board>,
    board: &mut Board,
    color: Color,
) -> Result<SearchOutcome<Point>, SearchError> {
    solve(context, board, color, &GomokuMoveGenerator, &GomokuEvaluator)
}
