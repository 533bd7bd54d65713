//! GTP protocol state machine and command execution

use std::io::{self, BufRead, Write};
use std::time::Duration;

use log::{debug, warn};

use crate::board::{BoardError, Color, Point};
use crate::evaluate;
use crate::game::engine::{Engine, EngineError, GenMove};

use super::command_parser::{is_known_command, GtpCommand, COMMAND_NAMES};
use super::response_formatter::{GtpResponseFormatter, GAME_ID};

const PROTOCOL_VERSION: &str = "2";
const ENGINE_NAME: &str = "gomoku";

/// GTP protocol handler
pub struct GtpProtocol {
    engine: Engine,
    should_quit: bool,
}

impl GtpProtocol {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Check if the protocol should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Parses and executes one input line. Blank and comment lines have no
    /// response.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        match line.parse::<GtpCommand>() {
            Ok(command) => self.execute_command(command),
            Err(usage) => Some(GtpResponseFormatter::format_failure(&usage)),
        }
    }

    /// Execute a GTP command and return the framed response
    pub fn execute_command(&mut self, command: GtpCommand) -> Option<String> {
        let result = match command {
            GtpCommand::Blank => return None,

            GtpCommand::ProtocolVersion => Ok(PROTOCOL_VERSION.to_string()),

            GtpCommand::Quit => {
                self.should_quit = true;
                Ok(String::new())
            }

            GtpCommand::Name => Ok(ENGINE_NAME.to_string()),

            GtpCommand::Version => Ok(env!("CARGO_PKG_VERSION").to_string()),

            GtpCommand::BoardSize(size) => self.engine.reset(size).map(|_| String::new()),

            GtpCommand::ClearBoard => {
                let size = self.engine.board().size();
                self.engine.reset(size).map(|_| String::new())
            }

            GtpCommand::ShowBoard => Ok(format!("\n{}", self.engine.board().to_ascii())),

            GtpCommand::Komi(komi) => {
                self.engine.set_komi(komi);
                Ok(String::new())
            }

            GtpCommand::KnownCommand(name) => Ok(is_known_command(&name).to_string()),

            GtpCommand::ListCommands => Ok(COMMAND_NAMES.join(" ")),

            GtpCommand::LegalMoves(_) => {
                let moves = self.engine.board().empty_points();
                Ok(GtpResponseFormatter::format_moves(&moves))
            }

            GtpCommand::Heuristic => {
                let board = self.engine.board();
                let verdict = evaluate::static_verdict(board, !board.legal_moves().is_empty());
                Ok(GtpResponseFormatter::format_verdict(&verdict))
            }

            GtpCommand::Play { color, coordinate } => Ok(self.play(&color, &coordinate)),

            GtpCommand::GenMove(color) => self.generate_move(color),

            GtpCommand::RulesGameId => Ok(GAME_ID.to_string()),

            GtpCommand::RulesBoardSize => Ok(self.engine.board().size().to_string()),

            GtpCommand::RulesLegalMoves => {
                let moves = self.engine.board().legal_moves();
                Ok(GtpResponseFormatter::format_moves(&moves))
            }

            GtpCommand::RulesSideToMove => Ok(self.engine.board().current_player().to_string()),

            GtpCommand::RulesBoard => Ok(self.engine.board().to_gogui_string()),

            GtpCommand::RulesFinalResult => Ok(GtpResponseFormatter::format_final_result(
                self.engine.check_game_over(),
            )),

            GtpCommand::AnalyzeCommands => Ok(GtpResponseFormatter::format_analyze_commands()),

            GtpCommand::TimeLimit(seconds) => {
                self.engine.set_time_limit(Duration::from_secs(seconds));
                Ok(String::new())
            }

            GtpCommand::PrintTime => Ok(self.engine.time_limit().as_secs().to_string()),

            GtpCommand::Push => {
                self.engine.push_snapshot();
                Ok(String::new())
            }

            GtpCommand::Undo => self.engine.undo_snapshot().map(|_| String::new()),

            GtpCommand::Solve => {
                let color = self.engine.board().current_player();
                self.engine
                    .solve(color)
                    .map(|outcome| GtpResponseFormatter::format_outcome(&outcome, color))
            }

            GtpCommand::Unknown(name) => {
                debug!("Unknown command: {}", name);
                return Some(GtpResponseFormatter::format_failure("Unknown command"));
            }
        };

        Some(match result {
            Ok(response) => GtpResponseFormatter::format_success(&response),
            Err(error) => {
                warn!("command failed: {}", error);
                GtpResponseFormatter::format_failure(&error.to_string())
            }
        })
    }

    /// Illegal moves are reported as successful responses carrying the
    /// reason, which is what GoGui expects from `play`.
    fn play(&mut self, color: &str, coordinate: &str) -> String {
        let color_text = color.to_lowercase();
        let color = match color_text.as_str() {
            "b" => Color::Black,
            "w" => Color::White,
            _ => return format!("illegal move: \"{}\" wrong color", color_text),
        };

        if coordinate.eq_ignore_ascii_case("pass") {
            self.engine.pass(color);
            return String::new();
        }

        let point = match Point::from_gtp(coordinate, self.engine.board().size()) {
            Ok(point) => point,
            Err(error) => return error.to_string(),
        };

        match self.engine.play(point, color) {
            Ok(()) => String::new(),
            Err(EngineError::Board(BoardError::Occupied { .. })) => {
                format!("illegal move: \"{}\" occupied", coordinate)
            }
            Err(error) => format!("illegal move: \"{}\" {}", coordinate, error),
        }
    }

    fn generate_move(&mut self, color: Color) -> Result<String, EngineError> {
        let response = match self.engine.generate_move(color)? {
            GenMove::Pass => "pass".to_string(),
            GenMove::Resign => "resign".to_string(),
            GenMove::Play(point) => point.to_gtp(),
        };
        Ok(response)
    }

    /// Run the GTP protocol loop, reading from stdin and writing to stdout
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Runs the protocol loop until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            debug!("gtp < {}", line);

            if let Some(response) = self.handle_line(&line) {
                write!(output, "{}", response)?;
                output.flush()?;
            }

            if self.should_quit() {
                break;
            }
        }
        Ok(())
    }
}
