//! The composition root and stroke state machine for the grid editor.
//!
//! A gesture moves through two states:
//!
//! ```text
//!            begin_stroke
//! ┌────────┐ ───────────► ┌──────────┐
//! │  Idle  │              │ Dragging │ ──┐ continue_stroke
//! │        │ ◄─────────── │          │ ◄─┘ (throttled)
//! └────────┘  end_stroke  └──────────┘
//!             / pointer-leave
//! ```
//!
//! Every operation runs to completion before the next event is processed;
//! there is no concurrent mutation, so each cell update and its history
//! entry are applied atomically together.

use std::time::Instant;

use log::{debug, info};

use crate::command::{CellChange, Edit, EditHistory};
use crate::grid::{Color, Grid, GridError, DEFAULT_DIMENSION};
use crate::input::{GestureConfig, GestureSession, InputEvent};

/// The editor core: current grid, edit history, and gesture session.
///
/// All three are owned exclusively here. The embedding UI calls the stroke
/// protocol in reaction to decoded pointer events and re-reads `grid()` to
/// render.
#[derive(Debug, Clone)]
pub struct EditorState {
    grid: Grid,
    history: EditHistory,
    session: GestureSession,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl EditorState {
    pub fn new(dimension: usize) -> Self {
        Self::with_config(dimension, GestureConfig::default())
    }

    pub fn with_config(dimension: usize, config: GestureConfig) -> Self {
        Self {
            grid: Grid::new(dimension),
            history: EditHistory::new(),
            session: GestureSession::new(config),
        }
    }

    /// The current grid, for rendering. Never mutated in place; every edit
    /// replaces it wholesale.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// True while a stroke is in progress. The UI can use this to stop
    /// forwarding move events, though `continue_stroke` ignores them while
    /// idle anyway.
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    pub fn active_color(&self) -> &Color {
        self.session.color()
    }

    /// Set the paint color for subsequent painting (palette selection).
    pub fn set_active_color(&mut self, color: Color) {
        self.session.set_color(color);
    }

    /// Dispatch a decoded pointer event to the stroke protocol.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), GridError> {
        match event {
            InputEvent::PointerDown { row, col } => self.begin_stroke(row, col),
            InputEvent::PointerMove { row, col } => self.continue_stroke(row, col),
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.end_stroke();
                Ok(())
            }
        }
    }

    /// Start a stroke at `(row, col)`.
    ///
    /// Painting a cell that already holds the active color changes nothing
    /// and records nothing, but the stroke still becomes active so later
    /// moves are processed.
    pub fn begin_stroke(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        // A missed pointer-up must not let the previous stroke absorb this
        // one.
        self.history.close_open_edit();
        self.session.begin();
        debug!("stroke started at ({row}, {col})");
        self.apply_paint(row, col)
    }

    /// Extend the active stroke to `(row, col)`.
    ///
    /// A no-op while idle; stray calls from the UI are harmless. Moves
    /// arriving inside the throttle window are dropped without touching the
    /// grid or the history.
    pub fn continue_stroke(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.continue_stroke_at(row, col, Instant::now())
    }

    /// `continue_stroke` with an explicit timestamp, for callers that drive
    /// the throttle from their own clock.
    pub fn continue_stroke_at(
        &mut self,
        row: usize,
        col: usize,
        now: Instant,
    ) -> Result<(), GridError> {
        if !self.session.is_active() {
            return Ok(());
        }
        if !self.session.should_process_move(now) {
            return Ok(());
        }
        self.apply_paint(row, col)
    }

    /// End the active stroke. The open paint edit is sealed so the next
    /// stroke gets its own undo step; the grid is untouched.
    pub fn end_stroke(&mut self) {
        if self.session.is_active() {
            debug!("stroke ended");
        }
        self.session.finish();
        self.history.close_open_edit();
    }

    /// Reset every cell to empty.
    ///
    /// Records the pre-clear grid as a single undo step, unless there is
    /// nothing to undo yet or the previous action was itself a clear.
    pub fn clear(&mut self) {
        if !self.history.is_empty() {
            self.history.push_clear(self.grid.clone());
        }
        self.grid = Grid::new(self.grid.dimension());
        info!("grid cleared");
    }

    /// Revert the newest edit.
    ///
    /// A paint edit has every recorded cell restored to its pre-gesture
    /// color in one copy-on-write pass; a clear swaps the stored grid back
    /// wholesale. Undoing with an empty history is a defined no-op. The
    /// popped edit is discarded; there is no redo.
    pub fn undo(&mut self) -> Result<(), GridError> {
        let Some(edit) = self.history.pop_last() else {
            debug!("undo with empty history ignored");
            return Ok(());
        };

        match edit {
            Edit::Paint(edit) => {
                let mut grid = self.grid.clone();
                for change in edit.cells() {
                    grid.set_cell(change.row, change.col, change.previous.clone())?;
                }
                debug!("undid paint edit over {} cells", edit.cells().len());
                self.grid = grid;
            }
            Edit::Clear { previous_grid } => {
                debug!("undid clear");
                self.grid = previous_grid;
            }
        }
        Ok(())
    }

    // Shared by begin/continue: idempotent-paint check, then the grid update
    // and its history entry applied together.
    fn apply_paint(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let previous = self.grid.get(row, col)?.clone();
        if previous.as_ref() == Some(self.session.color()) {
            return Ok(());
        }
        let color = self.session.color().clone();
        self.history.push_paint(CellChange { row, col, previous });
        self.grid = self.grid.with_cell(row, col, Some(color))?;
        Ok(())
    }
}
