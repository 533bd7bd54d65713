//! CLI argument parsing using StructOpt.

use std::time::Duration;

use gomoku::game::EngineConfig;
use structopt::StructOpt;

use crate::cli::commands::{gtp::GtpArgs, solve::SolveArgs, Command};

#[derive(StructOpt)]
#[structopt(
    name = "gomoku",
    about = "A five-in-a-row engine with a win/loss proof solver, speaking GTP on stdin/stdout"
)]
pub struct Gomoku {
    /// Log search and protocol details to stderr
    #[structopt(long)]
    pub debug: bool,
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(subcommand)]
    pub command: Option<GomokuCommand>,
}

#[derive(StructOpt)]
pub struct EngineArgs {
    /// Board size, between 2 and 25
    #[structopt(long, default_value = "7")]
    pub size: usize,
    /// Plies searched by the solver
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    /// Solver time budget in seconds
    #[structopt(long = "time-limit", default_value = "1")]
    pub time_limit: u64,
    /// Seed for the fallback move picker
    #[structopt(long)]
    pub seed: Option<u64>,
}

impl EngineArgs {
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            board_size: self.size,
            search_depth: self.depth,
            time_limit: Duration::from_secs(self.time_limit),
            seed: self.seed,
        }
    }
}

#[derive(StructOpt)]
pub enum GomokuCommand {
    #[structopt(
        name = "gtp",
        about = "Start GTP (Go Text Protocol) mode for GoGui and regression scripts. This is the default when no command is given."
    )]
    Gtp(GtpArgs),
    #[structopt(
        name = "solve",
        about = "Solve a single position given with `--position` (rows top to bottom, `X` black, `O` white, `.` empty, separated by `/`). The side to move is solved for unless `--color` is given."
    )]
    Solve(SolveArgs),
}

impl Gomoku {
    pub fn execute(self) {
        let config = self.engine.config();
        match self.command {
            Some(GomokuCommand::Gtp(cmd)) => cmd.execute(config),
            Some(GomokuCommand::Solve(cmd)) => cmd.execute(config),
            None => GtpArgs {}.execute(config),
        }
    }
}
