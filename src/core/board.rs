//! Board contents and win detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use super::mark::Mark;

/// The 8 triples that decide the game, in scan order:
/// rows top to bottom, then columns left to right, then the two diagonals.
///
/// `winner` reports the first complete triple in this order, which keeps the
/// result deterministic even for boards where several triples are complete.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A complete line: the mark that owns it and the three cells it covers.
///
/// The presentation layer uses the cells for highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    /// The winning mark.
    pub mark: Mark,

    /// The three cells of the line, in scan order.
    pub cells: [Cell; 3],
}

impl WinLine {
    /// Check whether a cell is part of this line.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// 3x3 board contents.
///
/// A plain value type: it stores marks and scans for complete lines, but
/// knows nothing about turn order or move legality. `Default` is the empty
/// board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Option<Mark>; 9],
}

impl Board {
    /// Get the mark at a cell, if any.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.squares[cell.index()]
    }

    /// Place a mark at a cell, overwriting whatever was there.
    pub fn set(&mut self, cell: Cell, mark: Mark) {
        self.squares[cell.index()] = Some(mark);
    }

    /// All nine squares in row-major order.
    #[must_use]
    pub fn squares(&self) -> &[Option<Mark>; 9] {
        &self.squares
    }

    /// Scan for a complete line.
    ///
    /// Returns the first complete triple in scan order (rows, columns,
    /// diagonals), or `None` if no line is complete. Pure and cheap enough
    /// to recompute on every query.
    #[must_use]
    pub fn winner(&self) -> Option<WinLine> {
        for line in LINES {
            if let Some(mark) = self.squares[line[0]] {
                if self.squares[line[1]] == Some(mark) && self.squares[line[2]] == Some(mark) {
                    return Some(WinLine {
                        mark,
                        cells: line.map(Cell::new),
                    });
                }
            }
        }
        None
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| square.is_some())
    }

    /// The unoccupied cells, in index order.
    ///
    /// At most 9 entries, so the result lives on the stack.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Cell; 9]> {
        Cell::all().filter(|&cell| self.get(cell).is_none()).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.squares[row * 3 + col] {
                    Some(mark) => write!(f, " {} ", mark)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
