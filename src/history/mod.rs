//! Move history: one board snapshot per ply.
//!
//! The history is the single source of truth for a session. Entry 0 is the
//! empty board; each later entry is its predecessor plus exactly one mark,
//! alternating X and O. Time travel never rewrites entries, it only moves a
//! cursor over them; a new ply after a jump truncates the discarded future
//! before appending.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell};

/// Board state after one ply.
///
/// `placed` records where the ply landed; only the initial entry has none.
/// The 1-based `(row, col)` shown in move labels is derived from `placed`,
/// not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Full board contents at this ply.
    pub board: Board,

    /// The cell this ply occupied, `None` for the initial empty entry.
    pub placed: Option<Cell>,
}

impl Snapshot {
    /// The all-empty snapshot that seeds every history.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            board: Board::default(),
            placed: None,
        }
    }
}

/// Append-only sequence of snapshots, one per ply.
///
/// Backed by a persistent vector, so cloning a session or truncating on a
/// new branch shares structure instead of copying all snapshots.
pub type History = Vector<Snapshot>;
