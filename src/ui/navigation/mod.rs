//! Slide navigation feature module.
//!
//! Tracks the committed slide and the single in-flight transition that the
//! settle window guards.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Committed slide plus optional pending target
//! - `intent.rs` - Request, Settle and Force
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::NavigationIntent;
pub use reducer::NavigationReducer;
pub use state::NavigationState;
