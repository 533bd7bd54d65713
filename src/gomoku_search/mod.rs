//! Gomoku-specific implementation of the proof search traits.

pub mod implementation;


pub use implementation::{solve_position, GomokuEvaluator, GomokuMoveGenerator};
