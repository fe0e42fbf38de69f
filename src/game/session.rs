//! Game session: history ownership and the operations that mutate it.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Mark, WinLine};
use crate::game::status::Status;
use crate::game::view::{MoveEntry, SortOrder};
use crate::history::{History, Snapshot};

/// A full game session: the move history plus a cursor into it.
///
/// Everything the presentation layer renders is derived from these four
/// fields on read. The turn is not one of them: X is next exactly when the
/// cursor sits on an even ply, so parity alone decides who moves.
///
/// ## Example
///
/// ```
/// use rust_ttt::{Cell, Game, Mark};
///
/// let mut game = Game::new();
/// assert!(game.apply_move(Cell::new(4)));
/// assert_eq!(game.board().get(Cell::new(4)), Some(Mark::X));
/// assert_eq!(format!("{}", game.status()), "Next player: O");
///
/// // Occupied cell: silently ignored.
/// assert!(!game.apply_move(Cell::new(4)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// One snapshot per ply, entry 0 being the empty board.
    history: History,

    /// History index of the currently displayed ply.
    step_number: usize,

    /// History index highlighted in the move list. Every operation keeps it
    /// equal to `step_number`; it stays a separate field so the view model
    /// carries both.
    selected_step: usize,

    /// Rendering order of the move list.
    sort_order: SortOrder,
}

impl Game {
    /// History length once all nine plies are played: the plies plus the
    /// initial empty snapshot.
    const FULL_HISTORY_LEN: usize = Cell::COUNT + 1;

    /// Create a session holding only the empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: Vector::unit(Snapshot::initial()),
            step_number: 0,
            selected_step: 0,
            sort_order: SortOrder::Ascending,
        }
    }

    // === Operations ===

    /// Place the next mark at `cell`.
    ///
    /// Ignored (returns `false`, no state change) when the viewed board
    /// already has a winner or the cell is occupied. Otherwise any snapshots
    /// beyond the viewed step are discarded, the new snapshot is appended,
    /// and the cursor moves onto it.
    ///
    /// Returns `true` if the ply was placed.
    pub fn apply_move(&mut self, cell: Cell) -> bool {
        let current = self.history[self.step_number].board;
        if current.winner().is_some() || current.get(cell).is_some() {
            return false;
        }

        let mut board = current;
        board.set(cell, self.next_mark());

        self.history.truncate(self.step_number + 1);
        self.history.push_back(Snapshot {
            board,
            placed: Some(cell),
        });
        self.step_number = self.history.len() - 1;
        self.selected_step = self.step_number;
        true
    }

    /// Move the cursor to `step` without touching history.
    ///
    /// `step` must be a valid history index; the presentation layer only
    /// ever offers indices taken from [`move_list`](Self::move_list).
    pub fn jump_to_step(&mut self, step: usize) {
        assert!(step < self.history.len(), "Step must index into history");
        self.step_number = step;
        self.selected_step = step;
    }

    /// Flip the move-list order. History and cursor are untouched.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    // === Derived State ===

    /// The board at the viewed ply.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.history[self.step_number].board
    }

    /// The mark that would be placed by the next ply.
    #[must_use]
    pub fn next_mark(&self) -> Mark {
        if self.step_number % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// The complete line on the viewed board, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<WinLine> {
        self.board().winner()
    }

    /// Cells to highlight: the winning line, or empty while the game is
    /// open.
    #[must_use]
    pub fn highlighted_cells(&self) -> SmallVec<[Cell; 3]> {
        match self.winning_line() {
            Some(win) => SmallVec::from_slice(&win.cells),
            None => SmallVec::new(),
        }
    }

    /// Cells that would currently accept a ply.
    ///
    /// Empty once the viewed board has a winner.
    #[must_use]
    pub fn playable_cells(&self) -> SmallVec<[Cell; 9]> {
        if self.board().winner().is_some() {
            return SmallVec::new();
        }
        self.board().empty_cells()
    }

    /// Status line for the viewed ply.
    ///
    /// A draw is only reported when the whole history is played out, i.e.
    /// the draw check reads the history length, not the viewed board.
    #[must_use]
    pub fn status(&self) -> Status {
        if let Some(win) = self.board().winner() {
            Status::Won(win.mark)
        } else if self.history.len() == Self::FULL_HISTORY_LEN {
            Status::Draw
        } else {
            Status::InProgress(self.next_mark())
        }
    }

    /// The move list, one entry per history snapshot, ordered per
    /// `sort_order`.
    #[must_use]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                let label = match snapshot.placed {
                    Some(cell) => format!("Go to move #{} {}", step, cell),
                    None => "Go to game start".to_string(),
                };
                MoveEntry {
                    step,
                    label,
                    is_selected: step == self.selected_step,
                }
            })
            .collect();

        if self.sort_order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }

    // === Accessors ===

    /// Number of snapshots, the initial empty one included.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// History index of the currently displayed ply.
    #[must_use]
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// History index highlighted in the move list.
    #[must_use]
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Current move-list order.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
