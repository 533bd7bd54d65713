pub mod board;
pub mod evaluate;
pub mod game;
pub mod gomoku_search;
pub mod gtp;
pub mod prelude;
pub mod proof_searcher;
