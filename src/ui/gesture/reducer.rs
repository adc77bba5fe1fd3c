//! Reducer for touch gestures.

use crate::ui::mvi::Reducer;

use super::intent::GestureIntent;
use super::state::TouchGesture;

pub struct GestureReducer;

impl Reducer for GestureReducer {
    type State = TouchGesture;
    type Intent = GestureIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GestureIntent::Start { x } => TouchGesture {
                start_x: Some(x),
                current_x: None,
            },
            GestureIntent::Move { x } => TouchGesture {
                current_x: Some(x),
                ..state
            },
            GestureIntent::End => TouchGesture::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_then_move_yields_swipe() {
        let state = GestureReducer::reduce(TouchGesture::default(), GestureIntent::Start { x: 200.0 });
        let state = GestureReducer::reduce(state, GestureIntent::Move { x: 150.0 });
        let state = GestureReducer::reduce(state, GestureIntent::Move { x: 120.0 });
        assert_eq!(state.swipe(), Some((200.0, 120.0)));
    }

    #[test]
    fn tap_without_move_has_no_swipe() {
        let state = GestureReducer::reduce(TouchGesture::default(), GestureIntent::Start { x: 10.0 });
        assert_eq!(state.swipe(), None);
    }

    #[test]
    fn new_start_clears_previous_end() {
        let state = TouchGesture {
            start_x: Some(0.0),
            current_x: Some(90.0),
        };
        let state = GestureReducer::reduce(state, GestureIntent::Start { x: 40.0 });
        assert_eq!(state.current_x, None);
        assert_eq!(state.start_x, Some(40.0));
    }

    #[test]
    fn end_clears_gesture() {
        let state = TouchGesture {
            start_x: Some(0.0),
            current_x: Some(90.0),
        };
        assert_eq!(
            GestureReducer::reduce(state, GestureIntent::End),
            TouchGesture::default()
        );
    }

    #[test]
    fn move_without_start_is_not_a_swipe() {
        let state = GestureReducer::reduce(TouchGesture::default(), GestureIntent::Move { x: 5.0 });
        assert_eq!(state.swipe(), None);
    }
}
