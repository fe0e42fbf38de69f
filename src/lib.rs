//! # rust-ttt
//!
//! A tic-tac-toe game engine with full move history and time travel.
//!
//! ## Design Principles
//!
//! 1. **History Is the State**: every ply appends a board snapshot. The
//!    current board is whatever snapshot the cursor points at; jumping back
//!    is just moving the cursor.
//!
//! 2. **Derived on Read**: winner, status, turn, and the move list are
//!    recomputed from history on every query. Nothing is cached, so nothing
//!    can fall out of sync.
//!
//! 3. **Presentation-Agnostic**: the engine exposes plain data (`Board`,
//!    `Status`, `MoveEntry`) and three operations (`apply_move`,
//!    `jump_to_step`, `toggle_sort_order`). Rendering and input binding
//!    live entirely outside this crate.
//!
//! ## Modules
//!
//! - `core`: marks, cells, board contents, win detection
//! - `history`: per-ply board snapshots
//! - `game`: the session object, derived status, view types

pub mod core;
pub mod game;
pub mod history;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Mark, WinLine};

pub use crate::game::{Game, MoveEntry, SortOrder, Status};

pub use crate::history::{History, Snapshot};
