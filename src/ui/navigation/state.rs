//! State for slide navigation.

use crate::deck::Slide;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// Slide currently committed and shown.
    pub current: Slide,
    /// Target of the transition in flight, if any.
    pub pending: Option<Slide>,
}

impl UiState for NavigationState {}

impl NavigationState {
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }
}
