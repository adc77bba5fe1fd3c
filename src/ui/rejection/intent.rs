//! Intents for rejection escalation.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionIntent {
    /// The "No" control was activated.
    Refuse,
    /// Back to zero clicks and unit scale.
    Reset,
}

impl Intent for RejectionIntent {}
