//! GTP command implementation

use std::process;

use gomoku::game::Engine;
use gomoku::gtp::GtpProtocol;

use super::{Command, EngineConfig};

/// GTP mode - reads commands from stdin and answers on stdout
#[derive(structopt::StructOpt)]
pub struct GtpArgs {
    // No arguments needed for GTP mode
}

impl Command for GtpArgs {
    fn execute(self, config: EngineConfig) {
        let engine = match Engine::with_config(config) {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("Failed to start engine: {}", err);
                process::exit(1);
            }
        };

        let mut protocol = GtpProtocol::new(engine);
        if let Err(err) = protocol.run() {
            eprintln!("GTP connection failed: {}", err);
            process::exit(1);
        }
    }
}
