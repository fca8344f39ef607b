use super::{CellChange, Edit, PaintEdit};
use crate::grid::Grid;
use log::trace;

/// Ordered log of reversible edits, newest at the tail.
///
/// Entries are appended and popped at the tail only. The one exception is
/// that the tail `PaintEdit` is extended in place while its gesture is still
/// open, which is what collapses an entire drag stroke into a single undo
/// step without merging separate strokes.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    edits: Vec<Edit>,
}

impl EditHistory {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self { edits: Vec::new() }
    }

    /// Record one painted cell. Merges into the tail `PaintEdit` when that
    /// edit is still open (same gesture); otherwise starts a new edit.
    pub fn push_paint(&mut self, change: CellChange) {
        if let Some(Edit::Paint(edit)) = self.edits.last_mut() {
            if edit.is_open() {
                trace!("merging ({}, {}) into open paint edit", change.row, change.col);
                edit.record(change);
                return;
            }
        }
        trace!("new paint edit starting at ({}, {})", change.row, change.col);
        self.edits.push(Edit::Paint(PaintEdit::new(change)));
    }

    /// Record a whole-grid clear, unless the tail entry is already a clear.
    /// Two clears with nothing between them are one logical action and must
    /// not cost two undo steps.
    pub fn push_clear(&mut self, previous_grid: Grid) {
        if matches!(self.edits.last(), Some(Edit::Clear { .. })) {
            return;
        }
        self.edits.push(Edit::Clear { previous_grid });
    }

    /// Remove and return the newest edit, or `None` when the log is empty.
    /// Callers treat `None` as a no-op; undoing empty history is not an
    /// error.
    pub fn pop_last(&mut self) -> Option<Edit> {
        self.edits.pop()
    }

    /// Seal the tail `PaintEdit`, if any, so a later gesture starts its own
    /// entry instead of merging into a finished stroke.
    pub fn close_open_edit(&mut self) {
        if let Some(Edit::Paint(edit)) = self.edits.last_mut() {
            edit.close();
        }
    }

    /// Returns true if there is an edit that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.edits.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }
}
