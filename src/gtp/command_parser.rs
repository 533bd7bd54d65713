//! GTP command parsing from stdin

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::board::Color;

static COMMAND_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+").expect("command id regex is valid"));

/// Every command the engine answers to, in `list_commands` order.
pub const COMMAND_NAMES: [&str; 26] = [
    "protocol_version",
    "quit",
    "name",
    "boardsize",
    "showboard",
    "clear_board",
    "komi",
    "version",
    "known_command",
    "genmove",
    "list_commands",
    "play",
    "legal_moves",
    "heuristic",
    "gogui-rules_game_id",
    "gogui-rules_board_size",
    "gogui-rules_legal_moves",
    "gogui-rules_side_to_move",
    "gogui-rules_board",
    "gogui-rules_final_result",
    "gogui-analyze_commands",
    "timelimit",
    "printtime",
    "push",
    "undo",
    "solve",
];

/// GTP commands that the engine can receive
#[derive(Debug, PartialEq, Clone)]
pub enum GtpCommand {
    /// Empty or comment line; produces no response
    Blank,
    ProtocolVersion,
    Quit,
    Name,
    Version,
    BoardSize(usize),
    ClearBoard,
    ShowBoard,
    Komi(f64),
    KnownCommand(String),
    ListCommands,
    LegalMoves(Color),
    /// Static verdict for the side to move
    Heuristic,
    /// Color and coordinate are kept raw: a bad value is answered as an
    /// illegal move rather than as a syntax error.
    Play {
        color: String,
        coordinate: String,
    },
    GenMove(Color),
    RulesGameId,
    RulesBoardSize,
    RulesLegalMoves,
    RulesSideToMove,
    RulesBoard,
    RulesFinalResult,
    AnalyzeCommands,
    /// Time budget in seconds
    TimeLimit(u64),
    PrintTime,
    Push,
    Undo,
    Solve,
    Unknown(String),
}

impl FromStr for GtpCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.starts_with('#') {
            return Ok(GtpCommand::Blank);
        }

        // Regression test files prefix commands with a numeric id.
        let s = COMMAND_ID_REGEX.replace(s, "");
        let parts: Vec<&str> = s.split_whitespace().collect();
        let (command, args) = match parts.split_first() {
            Some((command, args)) => (*command, args),
            None => return Ok(GtpCommand::Blank),
        };

        if let Some((count, usage)) = expected_args(command) {
            if args.len() != count {
                return Err(usage.to_string());
            }
        }

        match command {
            "protocol_version" => Ok(GtpCommand::ProtocolVersion),
            "quit" => Ok(GtpCommand::Quit),
            "name" => Ok(GtpCommand::Name),
            "version" => Ok(GtpCommand::Version),
            "boardsize" => parse_arg(args[0], command).map(GtpCommand::BoardSize),
            "clear_board" => Ok(GtpCommand::ClearBoard),
            "showboard" => Ok(GtpCommand::ShowBoard),
            "komi" => parse_arg(args[0], command).map(GtpCommand::Komi),
            "known_command" => Ok(GtpCommand::KnownCommand(args[0].to_string())),
            "list_commands" => Ok(GtpCommand::ListCommands),
            "legal_moves" => parse_arg(args[0], command).map(GtpCommand::LegalMoves),
            "heuristic" => Ok(GtpCommand::Heuristic),
            "play" => Ok(GtpCommand::Play {
                color: args[0].to_string(),
                coordinate: args[1].to_string(),
            }),
            "genmove" => parse_arg(args[0], command).map(GtpCommand::GenMove),
            "gogui-rules_game_id" => Ok(GtpCommand::RulesGameId),
            "gogui-rules_board_size" => Ok(GtpCommand::RulesBoardSize),
            "gogui-rules_legal_moves" => Ok(GtpCommand::RulesLegalMoves),
            "gogui-rules_side_to_move" => Ok(GtpCommand::RulesSideToMove),
            "gogui-rules_board" => Ok(GtpCommand::RulesBoard),
            "gogui-rules_final_result" => Ok(GtpCommand::RulesFinalResult),
            "gogui-analyze_commands" => Ok(GtpCommand::AnalyzeCommands),
            "timelimit" => parse_arg(args[0], command).map(GtpCommand::TimeLimit),
            "printtime" => Ok(GtpCommand::PrintTime),
            "push" => Ok(GtpCommand::Push),
            "undo" => Ok(GtpCommand::Undo),
            "solve" => Ok(GtpCommand::Solve),
            _ => Ok(GtpCommand::Unknown(command.to_string())),
        }
    }
}

pub fn is_known_command(name: &str) -> bool {
    COMMAND_NAMES.contains(&name)
}

/// Argument count and usage message for commands that take arguments.
fn expected_args(command: &str) -> Option<(usize, &'static str)> {
    match command {
        "boardsize" => Some((1, "Usage: boardsize INT")),
        "komi" => Some((1, "Usage: komi FLOAT")),
        "known_command" => Some((1, "Usage: known_command CMD_NAME")),
        "genmove" => Some((1, "Usage: genmove {w,b}")),
        "play" => Some((2, "Usage: play {b,w} MOVE")),
        "legal_moves" => Some((1, "Usage: legal_moves {w,b}")),
        "timelimit" => Some((1, "Usage: timelimit INT")),
        _ => None,
    }
}

/// Parses a single argument, answering with the command's usage on failure.
fn parse_arg<T: FromStr>(arg: &str, command: &str) -> Result<T, String> {
    arg.parse::<T>().map_err(|_| {
        expected_args(command)
            .map(|(_, usage)| usage.to_string())
            .unwrap_or_else(|| format!("invalid argument: {}", arg))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(
            "protocol_version".parse::<GtpCommand>().unwrap(),
            GtpCommand::ProtocolVersion
        );
        assert_eq!("quit".parse::<GtpCommand>().unwrap(), GtpCommand::Quit);
        assert_eq!("solve".parse::<GtpCommand>().unwrap(), GtpCommand::Solve);
        assert_eq!(
            "gogui-rules_board".parse::<GtpCommand>().unwrap(),
            GtpCommand::RulesBoard
        );
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!("".parse::<GtpCommand>().unwrap(), GtpCommand::Blank);
        assert_eq!("  \t\r\n".parse::<GtpCommand>().unwrap(), GtpCommand::Blank);
        assert_eq!(
            "# a comment".parse::<GtpCommand>().unwrap(),
            GtpCommand::Blank
        );
    }

    #[test]
    fn test_strips_numeric_id() {
        assert_eq!(
            "12 boardsize 9".parse::<GtpCommand>().unwrap(),
            GtpCommand::BoardSize(9)
        );
        assert_eq!("3".parse::<GtpCommand>().unwrap(), GtpCommand::Blank);
    }

    #[test]
    fn test_parse_play_keeps_raw_arguments() {
        assert_eq!(
            "play x Z99".parse::<GtpCommand>().unwrap(),
            GtpCommand::Play {
                color: "x".to_string(),
                coordinate: "Z99".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_color_arguments() {
        assert_eq!(
            "genmove W".parse::<GtpCommand>().unwrap(),
            GtpCommand::GenMove(Color::White)
        );
        assert_eq!(
            "legal_moves b".parse::<GtpCommand>().unwrap(),
            GtpCommand::LegalMoves(Color::Black)
        );
    }

    #[test]
    fn test_argument_count_errors() {
        assert_eq!(
            "boardsize".parse::<GtpCommand>(),
            Err("Usage: boardsize INT".to_string())
        );
        assert_eq!(
            "play b".parse::<GtpCommand>(),
            Err("Usage: play {b,w} MOVE".to_string())
        );
        assert_eq!(
            "timelimit 1 2".parse::<GtpCommand>(),
            Err("Usage: timelimit INT".to_string())
        );
    }

    #[test]
    fn test_argument_value_errors() {
        assert_eq!(
            "boardsize nine".parse::<GtpCommand>(),
            Err("Usage: boardsize INT".to_string())
        );
        assert_eq!(
            "genmove red".parse::<GtpCommand>(),
            Err("Usage: genmove {w,b}".to_string())
        );
        assert_eq!(
            "komi 6.5".parse::<GtpCommand>().unwrap(),
            GtpCommand::Komi(6.5)
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            "fly away".parse::<GtpCommand>().unwrap(),
            GtpCommand::Unknown("fly".to_string())
        );
    }

    #[test]
    fn test_known_commands() {
        assert!(is_known_command("gogui-analyze_commands"));
        assert!(is_known_command("undo"));
        assert!(!is_known_command("test"));
    }
}
