//! State for touch gestures.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchGesture {
    pub start_x: Option<f32>,
    pub current_x: Option<f32>,
}

impl UiState for TouchGesture {}

impl TouchGesture {
    /// `(start_x, end_x)` once both ends are known.
    ///
    /// A touch without any movement yields nothing, so taps never swipe.
    pub fn swipe(&self) -> Option<(f32, f32)> {
        Some((self.start_x?, self.current_x?))
    }
}
