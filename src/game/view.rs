//! View types handed to the presentation layer.
//!
//! These are plain data. The presentation layer renders them and calls back
//! into [`Game`](crate::game::Game) with the indices it got from here.

use serde::{Deserialize, Serialize};

/// Rendering order of the move list.
///
/// A pure display flag: toggling it never touches history or the cursor.
/// `Display` is the label of the sort toggle control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Game start first.
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Get the opposite order.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ASC"),
            SortOrder::Descending => write!(f, "DESC"),
        }
    }
}

/// One rendered entry of the move list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to. Valid to pass straight to
    /// [`Game::jump_to_step`](crate::game::Game::jump_to_step).
    pub step: usize,

    /// Button label, e.g. `"Go to move #3 (2, 1)"`.
    pub label: String,

    /// True for the entry highlighted in the list.
    pub is_selected: bool,
}
