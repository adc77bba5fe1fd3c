//! Touch gesture feature module.
//!
//! Samples horizontal positions across one touch so the controller can
//! turn it into a swipe when the touch ends.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Start and latest position of the current touch
//! - `intent.rs` - Start, Move, End
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::GestureIntent;
pub use reducer::GestureReducer;
pub use state::TouchGesture;
