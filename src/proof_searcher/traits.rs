//! Core traits for the generic win/loss proof search.

use std::fmt::Debug;

use crate::board::Color;

use super::Verdict;

/// Represents the state of a two-player game the prover can reason about.
/// `Clone` is the full, independent copy the snapshot stack stores.
pub trait GameState: Clone {
    type Move: Copy + PartialEq + Debug;

    /// Applies `game_move` for `color` in place. Returns whether the move was
    /// legal and applied.
    fn apply_move(&mut self, game_move: Self::Move, color: Color) -> bool;

    /// The winner if the position is already decided.
    fn check_game_end(&self) -> Option<Color>;
}

/// Enumerates the legal moves of the side to move.
///
/// The order of the returned moves decides every tie in the search, so it must
/// be deterministic for results to be reproducible.
pub trait MoveGenerator<S: GameState> {
    fn generate_moves(&self, state: &S) -> Vec<S::Move>;
}

/// Scores positions at the leaves of the search.
pub trait Evaluator<S: GameState> {
    /// `has_legal_moves` is false when the leaf was reached because no move is
    /// left, rather than because the depth ran out.
    fn evaluate(&self, state: &S, has_legal_moves: bool) -> Verdict;
}
