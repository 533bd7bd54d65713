//! Win/loss proof search.
//!
//! # Nodes
//!
//! The prover alternates between two kinds of node. At an OR node the side to
//! move tries to prove a win: the node proves a win if any of its moves does,
//! and every move is explored. At an AND node the opponent replies: the node
//! proves the win only if every reply still loses, so it returns as soon as
//! one reply escapes. Both kinds share the `prove` function below.
//!
//! There is no alpha-beta window. The AND-node short-circuit is the only
//! pruning, which keeps the result an exact win/loss proof at the given depth.
//! Scores from AND nodes that short-circuited are not comparable to scores
//! from exhausted ones.
//!
//! # Undo
//!
//! Moves are undone by restoring a full copy of the state from the context's
//! snapshot stack. A push always precedes the move and a pop always follows
//! its subtree, so a finished search leaves the stack as it found it.
//!
//! # Time
//!
//! The time budget is checked by the driver before each root move only. A
//! root subtree that has started always runs to completion.

use std::cmp::{max, min};
use std::time::{Duration, Instant};

use log::{debug, warn};
use thiserror::Error;

use crate::board::Color;

use super::snapshot_stack::SnapshotStack;
use super::time_budget::TimeBudget;
use super::{Evaluator, GameState, MoveGenerator, SearchOutcome, SolveStatus, Verdict};

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SearchError {
    #[error("snapshot stack underflow")]
    StackUnderflow,
    #[error("depth must be at least 1")]
    DepthTooLow,
    #[error("move generator produced an illegal move: {0}")]
    IllegalMove(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The side to move tries to prove a win.
    Or,
    /// The opponent tries to refute it.
    And,
}

impl NodeKind {
    fn child(self) -> Self {
        match self {
            NodeKind::Or => NodeKind::And,
            NodeKind::And => NodeKind::Or,
        }
    }
}

/// Statistics collected during search.
#[derive(Clone, Debug, Default)]
struct SearchStats {
    position_count: usize,
    leaf_count: usize,
    and_cutoffs: usize,
    last_status: Option<SolveStatus>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, status: SolveStatus, duration: Duration) {
        self.last_status = Some(status);
        self.last_duration = Some(duration);
    }
}

/// Everything one search owns: its undo log, its time budget, its depth and
/// its statistics. Searches sharing a context must not overlap.
pub struct SearchContext<S: GameState> {
    depth: u8,
    time_budget: TimeBudget,
    snapshots: SnapshotStack<S>,
    stats: SearchStats,
}

impl<S: GameState> Default for SearchContext<S> {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl<S: GameState> SearchContext<S> {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            time_budget: TimeBudget::default(),
            snapshots: SnapshotStack::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn with_time_budget(depth: u8, time_budget: TimeBudget) -> Self {
        Self {
            time_budget,
            ..Self::new(depth)
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub fn time_budget(&self) -> TimeBudget {
        self.time_budget
    }

    /// Replaces the budget used by every following `solve` call.
    pub fn set_time_limit(&mut self, limit: Duration) {
        self.time_budget.set(limit);
    }

    pub fn snapshot_depth(&self) -> usize {
        self.snapshots.depth()
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn leaf_count(&self) -> usize {
        self.stats.leaf_count
    }

    pub fn and_cutoff_count(&self) -> usize {
        self.stats.and_cutoffs
    }

    pub fn last_status(&self) -> Option<SolveStatus> {
        self.stats.last_status
    }

    pub fn last_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Pushes a copy of `state`, then applies the move. `restore` undoes it.
    /// An illegal move leaves its snapshot on the stack for `solve` to unwind.
    fn make_move(
        &mut self,
        state: &mut S,
        game_move: S::Move,
        color: Color,
    ) -> Result<(), SearchError> {
        self.snapshots.push(state);
        if !state.apply_move(game_move, color) {
            return Err(SearchError::IllegalMove(format!(
                "{:?} for {}",
                game_move, color
            )));
        }
        Ok(())
    }

    fn restore(&mut self, state: &mut S) -> Result<(), SearchError> {
        *state = self.snapshots.pop()?;
        Ok(())
    }
}

/// Determines whether `color`, to move in `state`, can force a win within
/// the context's depth and time budget.
///
/// On error the snapshot stack is truncated back to its depth on entry and
/// `state` is restored to the position it was called with.
pub fn solve<S, G, E>(
    context: &mut SearchContext<S>,
    state: &mut S,
    color: Color,
    move_generator: &G,
    evaluator: &E,
) -> Result<SearchOutcome<S::Move>, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    if context.depth == 0 {
        return Err(SearchError::DepthTooLow);
    }

    context.reset_stats();
    let start = Instant::now();
    let entry_depth = context.snapshots.depth();

    let result = solve_root(context, state, color, move_generator, evaluator, start);

    match &result {
        Ok(outcome) => {
            context.stats.record_result(outcome.status, start.elapsed());
            debug!(
                "solve for {}: {:?} {:?} (score {}) after {} positions in {:?}",
                color,
                outcome.status,
                outcome.best_move,
                outcome.score,
                context.stats.position_count,
                start.elapsed()
            );
        }
        Err(error) => {
            warn!("solve for {} aborted: {}", color, error);
            // The first snapshot above the entry depth is the root position.
            if context.snapshots.depth() > entry_depth {
                context.snapshots.truncate(entry_depth + 1);
                context.restore(state)?;
            }
        }
    }

    result
}

fn solve_root<S, G, E>(
    context: &mut SearchContext<S>,
    state: &mut S,
    color: Color,
    move_generator: &G,
    evaluator: &E,
    start: Instant,
) -> Result<SearchOutcome<S::Move>, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    if let Some(winner) = state.check_game_end() {
        if winner == color.opposite() {
            return Ok(SearchOutcome::no_win_found());
        }
        let verdict = evaluator.evaluate(state, false).for_color(color);
        return Ok(SearchOutcome::win(None, verdict.score));
    }

    let child_depth = context.depth - 1;
    let mut outcome = SearchOutcome::no_win_found();

    for game_move in move_generator.generate_moves(state) {
        if context.time_budget.is_exhausted(start) {
            if outcome.best_move.is_some() {
                debug!(
                    "time budget exhausted, discarding {:?} {:?}",
                    outcome.status, outcome.best_move
                );
            }
            return Ok(SearchOutcome::timeout());
        }

        context.make_move(state, game_move, color)?;
        let verdict = prove(
            context,
            state,
            child_depth,
            color.opposite(),
            NodeKind::And,
            move_generator,
            evaluator,
        )?;
        context.restore(state)?;

        let verdict = verdict.for_color(color);
        debug!("root move {:?}: {:?}", game_move, verdict);

        if verdict.proves_win && verdict.score > outcome.score {
            outcome = SearchOutcome::win(Some(game_move), verdict.score);
        } else if outcome.status == SolveStatus::NoWinFound && verdict.score == 0 {
            outcome = SearchOutcome::draw(game_move);
        }
    }

    Ok(outcome)
}

/// Evaluates one node of the proof search for `color` to move.
///
/// At an OR node the returned verdict is from `color`'s point of view; at an
/// AND node it is from the opponent's, i.e. the side trying to prove the win.
pub fn prove<S, G, E>(
    context: &mut SearchContext<S>,
    state: &mut S,
    depth: u8,
    color: Color,
    node: NodeKind,
    move_generator: &G,
    evaluator: &E,
) -> Result<Verdict, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    context.stats.position_count += 1;

    let moves = move_generator.generate_moves(state);
    if depth == 0 || moves.is_empty() {
        context.stats.leaf_count += 1;
        return Ok(evaluator.evaluate(state, !moves.is_empty()));
    }

    let perspective = match node {
        NodeKind::Or => color,
        NodeKind::And => color.opposite(),
    };
    let mut proves_win = false;
    let mut best_score = match node {
        NodeKind::Or => i32::MIN,
        NodeKind::And => i32::MAX,
    };

    for game_move in moves {
        context.make_move(state, game_move, color)?;
        let child = prove(
            context,
            state,
            depth - 1,
            color.opposite(),
            node.child(),
            move_generator,
            evaluator,
        )?;
        context.restore(state)?;

        let child = child.for_color(perspective);
        match node {
            NodeKind::Or => {
                proves_win |= child.proves_win;
                best_score = max(best_score, child.score);
            }
            NodeKind::And => {
                if !child.proves_win {
                    context.stats.and_cutoffs += 1;
                    return Ok(Verdict::unproven(perspective, child.score));
                }
                best_score = min(best_score, child.score);
            }
        }
    }

    let proves_win = match node {
        NodeKind::Or => proves_win,
        NodeKind::And => true,
    };
    Ok(Verdict {
        proves_win,
        color: perspective,
        score: best_score,
    })
}
