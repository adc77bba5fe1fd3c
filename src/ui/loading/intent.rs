//! Intents for the loading sequence.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingIntent {
    /// Begin run `run` at 0%. Ignored unless Idle.
    Start { run: u64 },

    /// One interval tick of run `run`.
    Tick {
        run: u64,
        step: u8,
        error_threshold: u8,
    },

    /// Post-completion delay of run `run` elapsed.
    Finish { run: u64 },
}

impl Intent for LoadingIntent {}
