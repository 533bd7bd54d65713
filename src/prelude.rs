//! Common types re-exported for convenience.

pub use crate::board::{Board, Color, Point};
pub use crate::game::{Engine, EngineConfig, GenMove};
pub use crate::proof_searcher::{SearchOutcome, SolveStatus};
