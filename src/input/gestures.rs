use crate::grid::Color;
use log::trace;
use std::time::{Duration, Instant};

/// Paint color a fresh session starts with.
const DEFAULT_COLOR: &str = "#000000";

/// Configuration for gesture handling.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Minimum interval between processed pointer-move events during a drag.
    pub throttle_window: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            throttle_window: Duration::from_millis(10),
        }
    }
}

/// Tracks one continuous pointer-down-to-pointer-up interaction: whether a
/// drag is in progress, the paint color it applies, and the throttle gate
/// that drops bursts of move events.
#[derive(Debug, Clone)]
pub struct GestureSession {
    config: GestureConfig,
    active: bool,
    color: Color,
    last_move: Option<Instant>,
}

impl GestureSession {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            active: false,
            color: Color::from(DEFAULT_COLOR),
            last_move: None,
        }
    }

    /// True while a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn begin(&mut self) {
        self.active = true;
    }

    pub(crate) fn finish(&mut self) {
        self.active = false;
    }

    /// Leading-edge throttle gate for move events.
    ///
    /// The first event in a burst passes immediately; later events pass only
    /// once the window has elapsed since the last processed one, and a pass
    /// resets the window. Dropped events are discarded outright, never
    /// queued. The gate outlives individual gestures.
    pub(crate) fn should_process_move(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_move {
            if now.duration_since(last) < self.config.throttle_window {
                trace!("move event dropped by throttle");
                return false;
            }
        }
        self.last_move = Some(now);
        true
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
