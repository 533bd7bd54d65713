//! Terminal detection and static evaluation of gomoku positions.

use crate::board::{Board, Color};
use crate::proof_searcher::Verdict;

mod patterns;

pub use patterns::{window_totals, WINDOW_SCORES, WIN_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Win(Color),
    Draw,
}

/// Returns the game ending state if the game has ended, otherwise returns None.
pub fn game_ending(board: &Board) -> Option<GameEnding> {
    if let Some(winner) = board.check_game_end() {
        return Some(GameEnding::Win(winner));
    }
    if board.is_full() {
        return Some(GameEnding::Draw);
    }
    None
}

/// Heuristic score of the position from `color`'s point of view.
pub fn score(board: &Board, color: Color) -> i32 {
    let (black, white) = window_totals(board);
    match color {
        Color::Black => black - white,
        Color::White => white - black,
    }
}

/// The verdict used at the leaves of the proof search.
///
/// A decided game proves a win for its winner. Without legal moves the game
/// is a draw. Otherwise the heuristic score for the side to move is reported,
/// never as a proven win.
pub fn static_verdict(board: &Board, has_legal_moves: bool) -> Verdict {
    if let Some(winner) = board.check_game_end() {
        return Verdict::win(winner, WIN_SCORE);
    }

    let to_move = board.current_player();
    if !has_legal_moves {
        return Verdict::unproven(to_move, 0);
    }
    Verdict::unproven(to_move, score(board, to_move))
}
