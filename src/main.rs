mod cli;

use env_logger::Env;
use structopt::StructOpt;

use crate::cli::Gomoku;

fn main() {
    let args = Gomoku::from_args();

    // stdout carries the protocol, so logs go to stderr.
    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    args.execute();
}
