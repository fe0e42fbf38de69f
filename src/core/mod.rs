//! Board primitives: marks, cells, and win detection.
//!
//! Everything here is a plain value type. The `game` module decides when a
//! ply is legal; this module only stores marks and scans for complete lines.

pub mod board;
pub mod cell;
pub mod mark;

pub use board::{Board, WinLine};
pub use cell::Cell;
pub use mark::Mark;
