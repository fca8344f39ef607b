mod edits;
mod history;

pub use edits::{CellChange, Edit, PaintEdit};
pub use history::EditHistory;
