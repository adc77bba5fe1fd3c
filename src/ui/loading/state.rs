//! State for the loading sequence.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,

    /// Ticking towards 100%.
    Running {
        run: u64,
        progress: u8,
        /// One-way: once raised it stays raised for the rest of the run.
        error_visible: bool,
    },

    /// Reached 100%, ticking stopped, waiting to hand over to Error.
    Finishing { run: u64 },
}

impl UiState for LoadingState {}

impl LoadingState {
    /// A run is in progress (overlay shown).
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn run(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Running { run, .. } | Self::Finishing { run } => Some(*run),
        }
    }

    pub fn progress(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Running { progress, .. } => *progress,
            Self::Finishing { .. } => 100,
        }
    }

    pub fn error_visible(&self) -> bool {
        match self {
            Self::Idle => false,
            Self::Running { error_visible, .. } => *error_visible,
            Self::Finishing { .. } => true,
        }
    }
}
