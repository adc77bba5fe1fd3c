//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (clicks, taps, key presses)
/// - Timer callbacks (settle windows, loading ticks)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
