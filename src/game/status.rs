//! Game status derived from the viewed board and the history length.

use serde::{Deserialize, Serialize};

use crate::core::Mark;

/// Outcome (or progress) of the game as seen from the viewed ply.
///
/// Always recomputed by [`Game::status`](crate::game::Game::status), never
/// stored. The `Display` output is the status line shown above the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// A line is complete; the mark that owns it wins.
    Won(Mark),

    /// All nine plies are played and no line is complete.
    Draw,

    /// Game continues; the payload is the mark to move.
    InProgress(Mark),
}

impl Status {
    /// Check if the game has ended, by win or by draw.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Status::InProgress(_))
    }

    /// The winning mark, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Status::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Won(mark) => write!(f, "Winner {}", mark),
            Status::Draw => write!(f, "Draw, no one wins"),
            Status::InProgress(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Status::Won(Mark::X)), "Winner X");
        assert_eq!(format!("{}", Status::Won(Mark::O)), "Winner O");
        assert_eq!(format!("{}", Status::Draw), "Draw, no one wins");
        assert_eq!(format!("{}", Status::InProgress(Mark::X)), "Next player: X");
        assert_eq!(format!("{}", Status::InProgress(Mark::O)), "Next player: O");
    }

    #[test]
    fn test_is_over() {
        assert!(Status::Won(Mark::X).is_over());
        assert!(Status::Draw.is_over());
        assert!(!Status::InProgress(Mark::O).is_over());
    }

    #[test]
    fn test_winner() {
        assert_eq!(Status::Won(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Status::Draw.winner(), None);
        assert_eq!(Status::InProgress(Mark::X).winner(), None);
    }
}
