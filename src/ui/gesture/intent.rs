//! Intents for touch gestures.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureIntent {
    /// Finger down at `x`; discards any earlier gesture.
    Start { x: f32 },
    /// Finger moved to `x`.
    Move { x: f32 },
    /// Finger lifted.
    End,
}

impl Intent for GestureIntent {}
