//! Generic, time-bounded win/loss proof search over any two-player game that
//! implements the traits in [`traits`].

mod outcome;
mod search;
mod snapshot_stack;
mod time_budget;
pub mod traits;


pub use outcome::{SearchOutcome, SolveStatus, Verdict};
pub use search::{prove, solve, NodeKind, SearchContext, SearchError, DEFAULT_SEARCH_DEPTH};
pub use snapshot_stack::SnapshotStack;
pub use time_budget::{TimeBudget, DEFAULT_TIME_LIMIT};
pub use traits::{Evaluator, GameState, MoveGenerator};
