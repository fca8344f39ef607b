#![warn(clippy::all, rust_2018_idioms)]

pub mod command;
pub mod grid;
pub mod input;
pub mod state;

pub use command::{CellChange, Edit, EditHistory, PaintEdit};
pub use grid::{Cell, Color, Grid, GridError, DEFAULT_DIMENSION};
pub use input::{GestureConfig, GestureSession, InputEvent};
pub use state::EditorState;
