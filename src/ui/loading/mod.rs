//! Simulated loading sequence feature module.
//!
//! A progress bar that always ends by forcing the Error slide.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Lifecycle (Idle → Running → Finishing → Idle)
//! - `intent.rs` - Start, Tick, Finish, each tagged with its run id
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::LoadingIntent;
pub use reducer::LoadingReducer;
pub use state::LoadingState;
