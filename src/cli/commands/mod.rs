//! CLI command implementations.

use gomoku::game::EngineConfig;

pub trait Command {
    fn execute(self, config: EngineConfig);
}

pub mod gtp;
pub mod solve;
