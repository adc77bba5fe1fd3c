//! Reducer for slide navigation.

use crate::ui::mvi::Reducer;

use super::intent::NavigationIntent;
use super::state::NavigationState;

/// Pure navigation transitions.
///
/// Scheduling the settle timer and syncing the surface happen in the
/// controller, which compares the state before and after dispatch.
pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationState;
    type Intent = NavigationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavigationIntent::Request { target } => {
                if !target.is_navigable() || state.is_transitioning() {
                    return state;
                }
                NavigationState {
                    current: state.current,
                    pending: Some(target),
                }
            }
            NavigationIntent::Settle { target } => match state.pending {
                Some(pending) if pending == target => NavigationState {
                    current: target,
                    pending: None,
                },
                // Superseded by a forced jump
                _ => state,
            },
            NavigationIntent::Force { target } => NavigationState {
                current: target,
                pending: None,
            },
        }
    }
}
