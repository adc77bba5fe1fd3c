//! Rejection escalation feature module.
//!
//! Each "No" grows the "Yes" button along a fixed ladder of scales. Once
//! the ladder is exhausted the controller starts the loading sequence.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Click count, current scale and the scale ladder
//! - `intent.rs` - Refuse and Reset
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::RejectionIntent;
pub use reducer::RejectionReducer;
pub use state::{Escalation, RejectionState};
