//! State for rejection escalation.

use crate::ui::mvi::UiState;

/// Scales applied after the first, second and third "No".
pub const DEFAULT_SCALE_LADDER: [f32; 3] = [1.4, 2.0, 3.0];

#[derive(Debug, Clone, PartialEq)]
pub struct RejectionState {
    pub no_clicks: u32,
    /// Always `1.0` at zero clicks, otherwise the ladder entry for the
    /// last escalation reached.
    pub yes_scale: f32,
    pub(super) ladder: Vec<f32>,
}

/// What the latest click amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Escalation {
    /// No click since the last reset.
    None,
    /// Click number `stage + 1` grew the yes button to `scale`.
    Stage { stage: usize, scale: f32 },
    /// Every stage has been used up.
    Exhausted,
}

impl Default for RejectionState {
    fn default() -> Self {
        Self::with_ladder(DEFAULT_SCALE_LADDER.to_vec())
    }
}

impl UiState for RejectionState {}

impl RejectionState {
    pub fn with_ladder(ladder: Vec<f32>) -> Self {
        Self {
            no_clicks: 0,
            yes_scale: 1.0,
            ladder,
        }
    }

    pub fn ladder(&self) -> &[f32] {
        &self.ladder
    }

    pub fn escalation(&self) -> Escalation {
        let Some(stage) = (self.no_clicks as usize).checked_sub(1) else {
            return Escalation::None;
        };
        match self.ladder.get(stage) {
            Some(&scale) => Escalation::Stage { stage, scale },
            None => Escalation::Exhausted,
        }
    }
}
