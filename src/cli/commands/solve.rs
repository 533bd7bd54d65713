//! Solve command - prove a win, draw or loss for a single position.

use std::process;

use gomoku::board::{Board, Color};
use gomoku::game::Engine;
use gomoku::gtp::GtpResponseFormatter;
use structopt::StructOpt;

use super::{Command, EngineConfig};

#[derive(StructOpt)]
pub struct SolveArgs {
    #[structopt(long)]
    pub position: Board,
    #[structopt(short = "c", long = "color")]
    pub color: Option<Color>,
}

impl Command for SolveArgs {
    fn execute(self, config: EngineConfig) {
        let color = self.color.unwrap_or_else(|| self.position.current_player());
        let config = EngineConfig {
            board_size: self.position.size(),
            ..config
        };

        let mut engine = match Engine::with_config(config) {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("Failed to start engine: {}", err);
                process::exit(1);
            }
        };
        *engine.board_mut() = self.position;

        match engine.solve(color) {
            Ok(outcome) => println!("{}", GtpResponseFormatter::format_outcome(&outcome, color)),
            Err(err) => {
                eprintln!("Failed to solve position: {}", err);
                process::exit(1);
            }
        }
    }
}
