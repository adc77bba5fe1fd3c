//! Model-View-Intent (MVI) primitives for the deck.
//!
//! Each deck feature (navigation, rejection, loading, gesture) is a
//! state + intent + reducer triple built on these traits.
//!
//! # Architecture
//!
//! ```text
//! DeckEvent ──→ SlideController ──→ Intent ──→ Reducer ──→ State
//!                     │                                      │
//!                     └──── timers / surface commands ←──────┘
//! ```
//!
//! - **State**: plain data the controller reads after each dispatch
//! - **Intent**: user input or a fired timer, already decoded
//! - **Reducer**: pure `(State, Intent) -> State`; the controller performs
//!   every side effect around the dispatch call

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
