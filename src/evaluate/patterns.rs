//! Window pattern weights for the static evaluation.
//!
//! Every run of five consecutive points (in any of the four directions) that
//! holds stones of only one color is worth `WINDOW_SCORES[n]` to that color,
//! where `n` is the number of its stones in the window.

use crate::board::{Board, Color, Point, DIRECTIONS, MAX_BOARD_SIZE, WIN_LENGTH};

/// Score of a decided game. Larger than any sum of window scores on the
/// largest board, so a heuristic score never outranks a proven win.
pub const WIN_SCORE: i32 = 10_000_000;

pub const WINDOW_SCORES: [i32; 5] = [0, 1, 10, 100, 1_000];

/// Sums the window scores of both colors, returned as (black, white).
pub fn window_totals(board: &Board) -> (i32, i32) {
    let size = board.size();
    let mut black = 0;
    let mut white = 0;

    for start in board.points() {
        for &(d_row, d_col) in DIRECTIONS.iter() {
            // The window must fit on the board.
            if start.offset(d_row, d_col, WIN_LENGTH - 1, size).is_none() {
                continue;
            }

            match window_owner(board, start, (d_row, d_col)) {
                Some((Color::Black, stones)) => black += WINDOW_SCORES[stones],
                Some((Color::White, stones)) => white += WINDOW_SCORES[stones],
                None => {}
            }
        }
    }

    (black, white)
}

/// The single color holding stones in the window and how many, or `None` if
/// the window is empty or contested. Full windows are wins and are scored by
/// the terminal check instead.
fn window_owner(board: &Board, start: Point, (d_row, d_col): (i32, i32)) -> Option<(Color, usize)> {
    let mut owner = None;
    let mut stones = 0;

    for distance in 0..WIN_LENGTH {
        let point = start.offset(d_row, d_col, distance, board.size())?;
        if let Some(color) = board.get(point) {
            match owner {
                Some(existing) if existing != color => return None,
                _ => owner = Some(color),
            }
            stones += 1;
        }
    }

    if stones >= WINDOW_SCORES.len() {
        return None;
    }
    owner.map(|color| (color, stones))
}
