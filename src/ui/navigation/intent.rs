//! Intents for slide navigation.

use crate::deck::Slide;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Start a transition to `target`.
    /// Ignored for Error and while another transition is in flight.
    Request { target: Slide },

    /// The settle window for `target` elapsed; commit it.
    Settle { target: Slide },

    /// Jump to `target` immediately, bypassing every guard.
    /// Used only when the loading sequence completes.
    Force { target: Slide },
}

impl Intent for NavigationIntent {}
