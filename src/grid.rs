use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Grid dimension of the reference drawing surface.
pub const DEFAULT_DIMENSION: usize = 32;

/// Errors reported at the grid accessor boundary.
///
/// Coordinates are supposed to be validated by the UI layer before they
/// reach the core, so hitting this is a caller-contract violation; indices
/// are never silently clamped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is out of range for a {dimension}x{dimension} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        dimension: usize,
    },
}

/// An opaque, equality-comparable color token, e.g. a hex string like
/// `"#FF0000"`. The payload is shared, so cloning a color is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(Arc<str>);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color(Arc::from(value))
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Color(Arc::from(value))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One grid cell: either empty or holding a color.
pub type Cell = Option<Color>;

/// A fixed-dimension 2D grid of optional colors.
///
/// Updates are copy-on-write: `with_cell` returns a new grid and never
/// mutates one already handed to a caller. Rows are `Arc`-shared, so an
/// update clones the row spine plus the single touched row — O(dimension),
/// with all untouched rows shared structurally between versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    dimension: usize,
    rows: Vec<Arc<Vec<Cell>>>,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new(dimension: usize) -> Self {
        let row = Arc::new(vec![None; dimension]);
        Self {
            dimension,
            rows: vec![row; dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Read one cell.
    pub fn get(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        self.check_bounds(row, col)?;
        Ok(&self.rows[row][col])
    }

    /// Return a new grid identical to this one except for `(row, col)`.
    pub fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Result<Grid, GridError> {
        let mut next = self.clone();
        next.set_cell(row, col, cell)?;
        Ok(next)
    }

    /// In-place write on a grid the caller exclusively owns, used for the
    /// batched undo revert pass. Shared rows are unshared on first write.
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        Arc::make_mut(&mut self.rows[row])[col] = cell;
        Ok(())
    }

    /// Iterate every cell in row-major order, for rendering.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, cell))
        })
    }

    /// True when every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells().all(|(_, _, cell)| cell.is_none())
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.dimension || col >= self.dimension {
            return Err(GridError::OutOfRange {
                row,
                col,
                dimension: self.dimension,
            });
        }
        Ok(())
    }
}
