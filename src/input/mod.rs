mod gestures;

pub use gestures::{GestureConfig, GestureSession};

/// A pointer event already decoded to grid coordinates by the UI layer.
///
/// The core never sees raw window or touch events; the embedding UI maps its
/// event stream to these before forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed on a cell; starts a stroke.
    PointerDown { row: usize, col: usize },
    /// Pointer moved onto a cell during a stroke.
    PointerMove { row: usize, col: usize },
    /// Primary button released; ends the stroke.
    PointerUp,
    /// Pointer left the drawing surface. Treated like a release, since the
    /// matching pointer-up may never arrive.
    PointerLeave,
}
