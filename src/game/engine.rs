use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::{Board, BoardError, Color, Point, DEFAULT_BOARD_SIZE};
use crate::evaluate::{self, GameEnding};
use crate::gomoku_search::solve_position;
use crate::proof_searcher::{
    SearchContext, SearchError, SearchOutcome, SnapshotStack, TimeBudget, DEFAULT_SEARCH_DEPTH,
    DEFAULT_TIME_LIMIT,
};

/// Core engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub board_size: usize,
    pub search_depth: u8,
    pub time_limit: Duration,
    /// Seed for the fallback move picker. Entropy is used when unset.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            search_depth: DEFAULT_SEARCH_DEPTH,
            time_limit: DEFAULT_TIME_LIMIT,
            seed: None,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
    #[error("snapshot stack is empty")]
    NothingToUndo,
}

/// What `generate_move` decided to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMove {
    Pass,
    Resign,
    Play(Point),
}

/// The gomoku engine: owns the board, the solver's search context, and a
/// stack of boards saved by the user.
pub struct Engine {
    board: Board,
    search_context: SearchContext<Board>,
    saved_boards: SnapshotStack<Board>,
    komi: f64,
    rng: StdRng,
}

impl Engine {
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        if config.search_depth == 0 {
            return Err(SearchError::DepthTooLow.into());
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            board: Board::new(config.board_size)?,
            search_context: SearchContext::with_time_budget(
                config.search_depth,
                TimeBudget::new(config.time_limit),
            ),
            saved_boards: SnapshotStack::new(),
            komi: 0.0,
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Clears the board at the given size. Saved boards are kept.
    pub fn reset(&mut self, size: usize) -> Result<(), EngineError> {
        self.board.reset(size)?;
        Ok(())
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    pub fn set_komi(&mut self, komi: f64) {
        self.komi = komi;
    }

    pub fn search_depth(&self) -> u8 {
        self.search_context.depth()
    }

    pub fn time_limit(&self) -> Duration {
        self.search_context.time_budget().limit()
    }

    pub fn set_time_limit(&mut self, limit: Duration) {
        self.search_context.set_time_limit(limit);
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        evaluate::game_ending(&self.board)
    }

    pub fn play(&mut self, point: Point, color: Color) -> Result<(), EngineError> {
        self.board.play_move(point, color)?;
        debug!("{} played {}\n{}", color, point, self.board);
        Ok(())
    }

    pub fn pass(&mut self, color: Color) {
        self.board.pass(color);
    }

    /// Runs the proof search for `color`. The board is left unchanged.
    pub fn solve(&mut self, color: Color) -> Result<SearchOutcome<Point>, EngineError> {
        let outcome = solve_position(&mut self.search_context, &mut self.board, color)?;
        info!(
            "solved for {} in {:?}: {} positions, {} leaves, {} cutoffs",
            color,
            self.search_context.last_duration().unwrap_or_default(),
            self.search_context.searched_position_count(),
            self.search_context.leaf_count(),
            self.search_context.and_cutoff_count()
        );
        Ok(outcome)
    }

    /// Picks a move for `color` and plays it. A decided game is never
    /// continued: the winner passes and the loser resigns.
    pub fn generate_move(&mut self, color: Color) -> Result<GenMove, EngineError> {
        if let Some(winner) = self.board.check_game_end() {
            return Ok(if winner == color {
                GenMove::Pass
            } else {
                GenMove::Resign
            });
        }

        let outcome = self.solve(color)?;
        let chosen = match outcome.playable_move() {
            Some(&point) => Some(point),
            None => {
                debug!("solver gave {:?}, using fallback move", outcome.status);
                self.get_move(color)
            }
        };

        match chosen {
            Some(point) => {
                self.play(point, color)?;
                Ok(GenMove::Play(point))
            }
            None => Ok(GenMove::Pass),
        }
    }

    /// One-ply greedy fallback: an immediate win if there is one, otherwise
    /// a random move among those leaving the best static score.
    pub fn get_move(&mut self, color: Color) -> Option<Point> {
        let mut best_score = i32::MIN;
        let mut best_moves = Vec::new();

        for point in self.board.legal_moves() {
            let mut next = self.board.clone();
            if next.play_move(point, color).is_err() {
                continue;
            }
            if next.check_game_end() == Some(color) {
                return Some(point);
            }

            let has_legal_moves = !next.legal_moves().is_empty();
            let score = evaluate::static_verdict(&next, has_legal_moves)
                .for_color(color)
                .score;
            if score > best_score {
                best_score = score;
                best_moves.clear();
            }
            if score == best_score {
                best_moves.push(point);
            }
        }

        best_moves.choose(&mut self.rng).copied()
    }

    /// Saves a copy of the current board.
    pub fn push_snapshot(&mut self) {
        self.saved_boards.push(&self.board);
    }

    /// Restores the most recently saved board.
    pub fn undo_snapshot(&mut self) -> Result<(), EngineError> {
        self.board = self
            .saved_boards
            .pop()
            .map_err(|_| EngineError::NothingToUndo)?;
        Ok(())
    }

    pub fn saved_board_count(&self) -> usize {
        self.saved_boards.depth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gomoku_position;
    use crate::proof_searcher::SolveStatus;

    fn engine_with(board: Board) -> Engine {
        let mut engine = Engine::with_config(EngineConfig {
            board_size: board.size(),
            time_limit: Duration::from_secs(60),
            seed: Some(7),
            ..EngineConfig::default()
        })
        .unwrap();
        *engine.board_mut() = board;
        engine
    }

    #[test]
    fn test_default_config() {
        let engine = Engine::new().unwrap();
        assert_eq!(DEFAULT_BOARD_SIZE, engine.board().size());
        assert_eq!(DEFAULT_SEARCH_DEPTH, engine.search_depth());
        assert_eq!(DEFAULT_TIME_LIMIT, engine.time_limit());
    }

    #[test]
    fn test_invalid_board_size() {
        let result = Engine::with_config(EngineConfig {
            board_size: 40,
            ..EngineConfig::default()
        });
        assert_eq!(
            Some(EngineError::Board(BoardError::SizeOutOfRange { size: 40 })),
            result.err()
        );
    }

    #[test]
    fn test_zero_search_depth_is_rejected() {
        let result = Engine::with_config(EngineConfig {
            search_depth: 0,
            ..EngineConfig::default()
        });
        assert_eq!(
            Some(EngineError::Search(SearchError::DepthTooLow)),
            result.err()
        );
    }

    #[test]
    fn test_play_occupied() {
        let mut engine = Engine::new().unwrap();
        let point = Point::new(2, 2);
        engine.play(point, Color::Black).unwrap();
        assert_eq!(
            Err(EngineError::Board(BoardError::Occupied { point })),
            engine.play(point, Color::White)
        );
    }

    #[test]
    fn test_generate_move_completes_five() {
        let mut engine = engine_with(gomoku_position! {
            .......
            .......
            .......
            .......
            .......
            OOO.O..
            XXXX...
        });

        let generated = engine.generate_move(Color::Black).unwrap();

        assert_eq!(GenMove::Play(Point::new(1, 5)), generated);
        assert_eq!(Some(Color::Black), engine.board().check_game_end());
    }

    #[test]
    fn test_generate_move_on_decided_game() {
        let mut engine = engine_with(gomoku_position! {
            .......
            .......
            O.O.O..
            .......
            O...O..
            .......
            XXXXX..
        });

        assert_eq!(GenMove::Pass, engine.generate_move(Color::Black).unwrap());
        assert_eq!(GenMove::Resign, engine.generate_move(Color::White).unwrap());
    }

    #[test]
    fn test_generate_move_full_board_passes() {
        let mut engine = engine_with(gomoku_position! {
            XO
            OX
        });
        assert_eq!(GenMove::Pass, engine.generate_move(Color::Black).unwrap());
    }

    #[test]
    fn test_get_move_takes_immediate_win() {
        let mut engine = engine_with(gomoku_position! {
            .......
            .......
            .......
            .......
            .......
            OOO.O..
            XXXX...
        });
        assert_eq!(Some(Point::new(1, 5)), engine.get_move(Color::Black));
    }

    #[test]
    fn test_get_move_is_reproducible_with_seed() {
        let board = gomoku_position! {
            .......
            .......
            .......
            ...X...
            .......
            .......
            .......
        };
        let first = engine_with(board.clone()).get_move(Color::White);
        let second = engine_with(board).get_move(Color::White);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_solve_leaves_board_unchanged() {
        let board = gomoku_position! {
            .....
            .....
            ..X..
            ..O..
            .....
        };
        let mut engine = engine_with(board.clone());
        let outcome = engine.solve(Color::Black).unwrap();
        assert_ne!(SolveStatus::Timeout, outcome.status);
        assert_eq!(&board, engine.board());
    }

    #[test]
    fn test_set_time_limit() {
        let mut engine = Engine::new().unwrap();
        engine.set_time_limit(Duration::from_secs(0));
        assert_eq!(Duration::from_secs(0), engine.time_limit());
        assert_eq!(SolveStatus::Timeout, engine.solve(Color::Black).unwrap().status);
    }

    #[test]
    fn test_push_and_undo_snapshot() {
        let mut engine = Engine::new().unwrap();
        engine.push_snapshot();
        engine.play(Point::new(3, 3), Color::Black).unwrap();
        assert_eq!(1, engine.board().stone_count());

        engine.undo_snapshot().unwrap();
        assert_eq!(0, engine.board().stone_count());
        assert_eq!(0, engine.saved_board_count());
    }

    #[test]
    fn test_undo_without_snapshot() {
        let mut engine = Engine::new().unwrap();
        assert_eq!(Err(EngineError::NothingToUndo), engine.undo_snapshot());
    }
}
