//! GTP response formatting for stdout

use crate::board::{Color, Point};
use crate::evaluate::GameEnding;
use crate::proof_searcher::{SearchOutcome, SolveStatus, Verdict};

pub const GAME_ID: &str = "Gomoku";

const ANALYZE_COMMANDS: [(&str, &str); 6] = [
    ("Legal Moves For ToPlay", "gogui-rules_legal_moves"),
    ("Side to Play", "gogui-rules_side_to_move"),
    ("Final Result", "gogui-rules_final_result"),
    ("Board Size", "gogui-rules_board_size"),
    ("Rules GameID", "gogui-rules_game_id"),
    ("Show Board", "gogui-rules_board"),
];

/// Format GTP responses to send to stdout
pub struct GtpResponseFormatter;

impl GtpResponseFormatter {
    pub fn format_success(response: &str) -> String {
        format!("= {}\n\n", response)
    }

    pub fn format_failure(message: &str) -> String {
        format!("? {}\n\n", message)
    }

    /// Space separated coordinates, sorted as text.
    pub fn format_moves(moves: &[Point]) -> String {
        let mut coordinates: Vec<String> = moves.iter().map(Point::to_gtp).collect();
        coordinates.sort();
        coordinates.join(" ")
    }

    /// `<true|false> <b|w> <score>`
    pub fn format_verdict(verdict: &Verdict) -> String {
        format!(
            "{} {} {}",
            verdict.proves_win,
            verdict.color.letter(),
            verdict.score
        )
    }

    /// The `solve` result for `color`, the side that was solved for.
    pub fn format_outcome(outcome: &SearchOutcome<Point>, color: Color) -> String {
        match (outcome.status, outcome.best_move) {
            (SolveStatus::Timeout, _) => "unknown".to_string(),
            (SolveStatus::Win, Some(point)) => format!("{} {}", color.letter(), point),
            (SolveStatus::Win, None) => color.letter().to_string(),
            (SolveStatus::Draw, Some(point)) => format!("draw {}", point),
            (SolveStatus::Draw, None) => "draw".to_string(),
            (SolveStatus::NoWinFound, _) => color.opposite().letter().to_string(),
        }
    }

    pub fn format_final_result(ending: Option<GameEnding>) -> String {
        match ending {
            Some(GameEnding::Win(color)) => color.to_string(),
            Some(GameEnding::Draw) => "draw".to_string(),
            None => "unknown".to_string(),
        }
    }

    pub fn format_analyze_commands() -> String {
        ANALYZE_COMMANDS
            .iter()
            .map(|(label, command)| format!("pstring/{}/{}", label, command))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
