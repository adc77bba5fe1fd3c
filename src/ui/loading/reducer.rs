//! Reducer for the loading sequence.

use crate::ui::mvi::Reducer;

use super::intent::LoadingIntent;
use super::state::LoadingState;

/// Pure loading transitions.
///
/// Intents for a run other than the active one are dropped, so a stale
/// timer can never touch a newer run.
pub struct LoadingReducer;

impl Reducer for LoadingReducer {
    type State = LoadingState;
    type Intent = LoadingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadingIntent::Start { run } => match state {
                LoadingState::Idle => LoadingState::Running {
                    run,
                    progress: 0,
                    error_visible: false,
                },
                other => other,
            },

            LoadingIntent::Tick {
                run,
                step,
                error_threshold,
            } => match state {
                LoadingState::Running {
                    run: active,
                    progress,
                    error_visible,
                } if active == run => {
                    let progress = progress.saturating_add(step).min(100);
                    if progress >= 100 {
                        LoadingState::Finishing { run }
                    } else {
                        LoadingState::Running {
                            run,
                            progress,
                            error_visible: error_visible || progress >= error_threshold,
                        }
                    }
                }
                other => other,
            },

            LoadingIntent::Finish { run } => match state {
                LoadingState::Finishing { run: active } if active == run => LoadingState::Idle,
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(state: LoadingState, run: u64) -> LoadingState {
        LoadingReducer::reduce(
            state,
            LoadingIntent::Tick {
                run,
                step: 2,
                error_threshold: 50,
            },
        )
    }

    #[test]
    fn start_from_idle_runs_at_zero() {
        let new = LoadingReducer::reduce(LoadingState::Idle, LoadingIntent::Start { run: 1 });
        assert_eq!(
            new,
            LoadingState::Running {
                run: 1,
                progress: 0,
                error_visible: false
            }
        );
    }

    #[test]
    fn start_while_running_is_noop() {
        let state = LoadingState::Running {
            run: 1,
            progress: 40,
            error_visible: false,
        };
        let new = LoadingReducer::reduce(state, LoadingIntent::Start { run: 2 });
        assert_eq!(new, state);
    }

    #[test]
    fn error_flag_raises_at_threshold_and_stays() {
        let mut state = LoadingState::Running {
            run: 1,
            progress: 46,
            error_visible: false,
        };
        state = tick(state, 1);
        assert!(!state.error_visible());
        state = tick(state, 1);
        assert_eq!(state.progress(), 50);
        assert!(state.error_visible());
        for _ in 0..10 {
            state = tick(state, 1);
            assert!(state.error_visible());
        }
    }

    #[test]
    fn reaching_hundred_stops_ticking() {
        let state = tick(
            LoadingState::Running {
                run: 3,
                progress: 98,
                error_visible: true,
            },
            3,
        );
        assert_eq!(state, LoadingState::Finishing { run: 3 });
        assert_eq!(tick(state, 3), state);
        assert_eq!(state.progress(), 100);
    }

    #[test]
    fn stale_run_intents_are_ignored() {
        let state = LoadingState::Running {
            run: 2,
            progress: 10,
            error_visible: false,
        };
        assert_eq!(tick(state, 1), state);
        let finishing = LoadingState::Finishing { run: 2 };
        assert_eq!(
            LoadingReducer::reduce(finishing, LoadingIntent::Finish { run: 1 }),
            finishing
        );
        assert_eq!(
            LoadingReducer::reduce(finishing, LoadingIntent::Finish { run: 2 }),
            LoadingState::Idle
        );
    }

    #[test]
    fn step_overshoot_clamps_to_hundred() {
        let state = LoadingReducer::reduce(
            LoadingState::Running {
                run: 1,
                progress: 95,
                error_visible: true,
            },
            LoadingIntent::Tick {
                run: 1,
                step: 7,
                error_threshold: 50,
            },
        );
        assert_eq!(state.progress(), 100);
    }
}
