//! Player marks.

use serde::{Deserialize, Serialize};

/// One of the two marks placed on the board.
///
/// X always moves first. The mark to move is derived from ply parity by the
/// session, never stored here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark.
    ///
    /// ```
    /// use rust_ttt::core::Mark;
    ///
    /// assert_eq!(Mark::X.opposite(), Mark::O);
    /// assert_eq!(Mark::O.opposite(), Mark::X);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}
