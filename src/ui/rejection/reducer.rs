//! Reducer for rejection escalation.

use crate::ui::mvi::Reducer;

use super::intent::RejectionIntent;
use super::state::RejectionState;

pub struct RejectionReducer;

impl Reducer for RejectionReducer {
    type State = RejectionState;
    type Intent = RejectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RejectionIntent::Refuse => {
                let no_clicks = state.no_clicks.saturating_add(1);
                // Past the end of the ladder the scale stays where it was.
                let yes_scale = state
                    .ladder()
                    .get(no_clicks as usize - 1)
                    .copied()
                    .unwrap_or(state.yes_scale);
                RejectionState {
                    no_clicks,
                    yes_scale,
                    ..state
                }
            }
            RejectionIntent::Reset => RejectionState {
                no_clicks: 0,
                yes_scale: 1.0,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::rejection::Escalation;

    fn refuse(state: RejectionState, times: usize) -> RejectionState {
        (0..times).fold(state, |s, _| RejectionReducer::reduce(s, RejectionIntent::Refuse))
    }

    #[test]
    fn default_is_unit_scale() {
        let state = RejectionState::default();
        assert_eq!(state.no_clicks, 0);
        assert_eq!(state.yes_scale, 1.0);
        assert_eq!(state.escalation(), Escalation::None);
    }

    #[test]
    fn scales_follow_ladder() {
        let mut state = RejectionState::default();
        let mut scales = Vec::new();
        for _ in 0..3 {
            state = RejectionReducer::reduce(state, RejectionIntent::Refuse);
            scales.push(state.yes_scale);
        }
        assert_eq!(scales, vec![1.4, 2.0, 3.0]);
        assert_eq!(
            state.escalation(),
            Escalation::Stage {
                stage: 2,
                scale: 3.0
            }
        );
    }

    #[test]
    fn fourth_refusal_keeps_scale_and_exhausts() {
        let state = refuse(RejectionState::default(), 4);
        assert_eq!(state.no_clicks, 4);
        assert_eq!(state.yes_scale, 3.0);
        assert_eq!(state.escalation(), Escalation::Exhausted);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_ladder() {
        let state = refuse(RejectionState::with_ladder(vec![1.5]), 2);
        let state = RejectionReducer::reduce(state, RejectionIntent::Reset);
        assert_eq!(state.no_clicks, 0);
        assert_eq!(state.yes_scale, 1.0);
        assert_eq!(state.ladder(), &[1.5]);
    }

    #[test]
    fn refusals_carry_the_ladder_along() {
        let state = refuse(RejectionState::with_ladder(vec![1.1, 1.9]), 1);
        assert_eq!(state.yes_scale, 1.1);
        assert_eq!(state.ladder(), &[1.1, 1.9]);
    }

    #[test]
    fn custom_ladder_exhausts_earlier() {
        let state = refuse(RejectionState::with_ladder(vec![1.2, 1.8]), 3);
        assert_eq!(state.escalation(), Escalation::Exhausted);
        assert_eq!(state.yes_scale, 1.8);
    }
}
