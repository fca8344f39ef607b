use crate::grid::{Cell, Grid};
use serde::{Deserialize, Serialize};

/// The pre-edit value of one painted cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    /// Color the cell held before the gesture touched it.
    pub previous: Cell,
}

/// One painting gesture's worth of reversible changes.
///
/// `cells` is never empty and never records the same cell twice: the first
/// touch within a gesture wins, so undo restores the value the cell held
/// before the gesture began even if the pointer crosses it repeatedly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintEdit {
    cells: Vec<CellChange>,
    /// Still accepting merges from the gesture that created it.
    open: bool,
}

impl PaintEdit {
    pub(crate) fn new(first: CellChange) -> Self {
        Self {
            cells: vec![first],
            open: true,
        }
    }

    /// Record another cell touched by the same gesture. A cell already
    /// present keeps its originally recorded previous color.
    pub(crate) fn record(&mut self, change: CellChange) {
        if self.contains(change.row, change.col) {
            return;
        }
        self.cells.push(change);
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.iter().any(|c| c.row == row && c.col == col)
    }

    pub fn cells(&self) -> &[CellChange] {
        &self.cells
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }
}

/// A reversible entry in the edit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Edit {
    /// A batch of cell changes from one stroke.
    Paint(PaintEdit),
    /// A whole-grid clear. Clearing is global, so the full pre-clear grid is
    /// kept rather than a cell diff.
    Clear { previous_grid: Grid },
}
