use crate::board::Color;

/// What a search node proved: whether `color` can force a win, and a score
/// from `color`'s point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub proves_win: bool,
    pub color: Color,
    pub score: i32,
}

impl Verdict {
    pub fn win(color: Color, score: i32) -> Self {
        Self {
            proves_win: true,
            color,
            score,
        }
    }

    pub fn unproven(color: Color, score: i32) -> Self {
        Self {
            proves_win: false,
            color,
            score,
        }
    }

    /// Restates the verdict for `color`. A verdict reached for the other side
    /// proves nothing for `color` and its score is negated.
    pub fn for_color(self, color: Color) -> Self {
        if self.color == color {
            self
        } else {
            Self::unproven(color, -self.score)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    NoWinFound,
    Draw,
    Win,
    Timeout,
}

/// Result of a top-level `solve` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub status: SolveStatus,
    pub best_move: Option<M>,
    pub score: i32,
}

impl<M> SearchOutcome<M> {
    pub fn no_win_found() -> Self {
        Self {
            status: SolveStatus::NoWinFound,
            best_move: None,
            score: 0,
        }
    }

    pub fn timeout() -> Self {
        Self {
            status: SolveStatus::Timeout,
            best_move: None,
            score: 0,
        }
    }

    pub fn draw(best_move: M) -> Self {
        Self {
            status: SolveStatus::Draw,
            best_move: Some(best_move),
            score: 0,
        }
    }

    pub fn win(best_move: Option<M>, score: i32) -> Self {
        Self {
            status: SolveStatus::Win,
            best_move,
            score,
        }
    }

    /// A `Win` or `Draw` that names the move to play.
    pub fn playable_move(&self) -> Option<&M> {
        match self.status {
            SolveStatus::Win | SolveStatus::Draw => self.best_move.as_ref(),
            SolveStatus::NoWinFound | SolveStatus::Timeout => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_same_color_is_unchanged() {
        let verdict = Verdict::win(Color::Black, 10);
        assert_eq!(verdict, verdict.for_color(Color::Black));
    }

    #[test]
    fn test_for_other_color_negates_and_drops_win() {
        let verdict = Verdict::win(Color::White, 10).for_color(Color::Black);
        assert_eq!(Verdict::unproven(Color::Black, -10), verdict);
    }

    #[test]
    fn test_playable_move() {
        assert_eq!(Some(&3), SearchOutcome::win(Some(3), 5).playable_move());
        assert_eq!(Some(&4), SearchOutcome::draw(4).playable_move());
        assert_eq!(None, SearchOutcome::<u8>::win(None, 5).playable_move());
        assert_eq!(None, SearchOutcome::<u8>::timeout().playable_move());
        assert_eq!(None, SearchOutcome::<u8>::no_win_found().playable_move());
    }
}
