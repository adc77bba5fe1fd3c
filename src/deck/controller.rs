//! Slide navigation state machine and its timed side effects.

use crate::deck::event::{Control, DeckEvent, SwipeDirection};
use crate::deck::settings::DeckSettings;
use crate::deck::slide::Slide;
use crate::deck::surface::PresentationSurface;
use crate::deck::timer::TimerQueue;
use crate::ui::gesture::{GestureIntent, GestureReducer, TouchGesture};
use crate::ui::loading::{LoadingIntent, LoadingReducer, LoadingState};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavigationIntent, NavigationReducer, NavigationState};
use crate::ui::rejection::{Escalation, RejectionIntent, RejectionReducer, RejectionState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Work scheduled on the controller's timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeckTimer {
    /// Settle window of a navigation to this slide elapsed.
    Settle(Slide),
    /// Delayed navigation request (after the celebration).
    Navigate(Slide),
    AutoAdvance,
    HideAlert { generation: u64 },
    LoadingTick { run: u64 },
    LoadingFinish { run: u64 },
}

/// Alert currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Owns all deck state and drives a [`PresentationSurface`].
///
/// Single-threaded: every handler runs to completion, and time only moves
/// when the owner calls [`advance_to`](Self::advance_to). Invalid requests
/// are silent no-ops; nothing here returns an error.
pub struct SlideController<S> {
    settings: DeckSettings,
    surface: S,
    timers: TimerQueue<DeckTimer>,
    navigation: NavigationState,
    rejection: RejectionState,
    loading: LoadingState,
    gesture: TouchGesture,
    alert: Option<Alert>,
    alert_generation: u64,
    loading_runs: u64,
    mounted: bool,
}

impl<S: PresentationSurface> SlideController<S> {
    pub fn new(settings: DeckSettings, surface: S) -> Self {
        let rejection = RejectionState::with_ladder(settings.scale_ladder());
        Self {
            settings,
            surface,
            timers: TimerQueue::new(),
            navigation: NavigationState::default(),
            rejection,
            loading: LoadingState::default(),
            gesture: TouchGesture::default(),
            alert: None,
            alert_generation: 0,
            loading_runs: 0,
            mounted: false,
        }
    }

    pub fn handle(&mut self, event: DeckEvent) {
        match event {
            DeckEvent::Mount => self.mount(),
            DeckEvent::Click(control) => self.click(control),
            DeckEvent::TouchStart { x } => {
                dispatch_mvi!(self, gesture, GestureReducer, GestureIntent::Start { x });
            }
            DeckEvent::TouchMove { x } => {
                dispatch_mvi!(self, gesture, GestureReducer, GestureIntent::Move { x });
            }
            DeckEvent::TouchEnd => {
                let swipe = self.gesture.swipe();
                dispatch_mvi!(self, gesture, GestureReducer, GestureIntent::End);
                if let Some((start_x, end_x)) = swipe {
                    self.handle_swipe(start_x, end_x);
                }
            }
            DeckEvent::Swipe(direction) => self.swipe(direction),
            DeckEvent::Resize { width, height } => self.surface.resize(width, height),
        }
    }

    fn click(&mut self, control: Control) {
        tracing::debug!(?control, slide = %self.navigation.current, "Control activated");
        match control {
            Control::Begin => self.navigate(Slide::Proposal),
            Control::Yes => self.handle_yes(),
            Control::No => self.handle_no(),
            Control::GoBack => self.reset_and_return_to_proposal(),
            Control::ContinueToGallery => self.navigate(Slide::Gallery),
            Control::ContinueToMessages => self.navigate(Slide::Messages),
            Control::Dot(index) => match Slide::from_index(index) {
                Some(target) => self.navigate(target),
                None => tracing::debug!(index, "Dot outside the deck ignored"),
            },
            Control::BackButton => self.go_back(),
        }
    }

    /// Sync the surface with the initial state and arm the auto-advance.
    pub fn mount(&mut self) {
        if self.mounted {
            tracing::debug!("Repeated mount ignored");
            return;
        }
        self.mounted = true;
        self.sync_slide();
        self.surface.set_yes_button_scale(self.rejection.yes_scale);
        self.timers
            .schedule(self.settings.timing.auto_advance_ms, DeckTimer::AutoAdvance);
        tracing::info!(
            auto_advance_ms = self.settings.timing.auto_advance_ms,
            "Deck mounted"
        );
    }

    /// Start a transition to `target`.
    ///
    /// Ignored for the Error slide and while another transition is inside
    /// its settle window.
    pub fn navigate(&mut self, target: Slide) {
        let before = self.navigation;
        dispatch_mvi!(
            self,
            navigation,
            NavigationReducer,
            NavigationIntent::Request { target }
        );
        if self.navigation == before {
            tracing::debug!(
                %target,
                current = %before.current,
                transitioning = before.is_transitioning(),
                "Navigation request ignored"
            );
            return;
        }
        tracing::debug!(%target, from = %before.current, "Navigation started");
        self.timers
            .schedule(self.settings.timing.settle_ms, DeckTimer::Settle(target));
    }

    pub fn go_back(&mut self) {
        match self.navigation.current.back_target() {
            Some(target) => self.navigate(target),
            None => tracing::debug!("Back from the first slide ignored"),
        }
    }

    pub fn handle_yes(&mut self) {
        let count = self.settings.timing.celebration_particles;
        tracing::info!(count, "Celebration");
        self.surface.spawn_celebration_particles(count);
        self.timers.schedule(
            self.settings.timing.celebration_delay_ms,
            DeckTimer::Navigate(Slide::Letter),
        );
    }

    pub fn handle_no(&mut self) {
        dispatch_mvi!(self, rejection, RejectionReducer, RejectionIntent::Refuse);
        tracing::debug!(no_clicks = self.rejection.no_clicks, "Refusal");
        match self.rejection.escalation() {
            Escalation::Stage { stage, scale } => {
                if let Some(rung) = self.settings.rejections.get(stage) {
                    let (title, message) = (rung.title.clone(), rung.message.clone());
                    self.show_alert(title, message);
                }
                self.surface.set_yes_button_scale(scale);
            }
            Escalation::Exhausted => self.start_loading_sequence(),
            Escalation::None => {}
        }
    }

    /// Run the fake progress bar that ends on the Error slide.
    ///
    /// A second start while a run is still going is ignored.
    pub fn start_loading_sequence(&mut self) {
        if self.loading.is_active() {
            tracing::debug!("Loading sequence already running");
            return;
        }
        self.loading_runs += 1;
        let run = self.loading_runs;
        dispatch_mvi!(self, loading, LoadingReducer, LoadingIntent::Start { run });
        tracing::info!(run, "Loading sequence started");

        self.surface.show_loading_overlay();
        self.surface.set_loading_progress(self.loading.progress());
        self.surface.set_loading_error_visible(false);
        self.timers.schedule(
            self.settings.timing.loading_tick_ms,
            DeckTimer::LoadingTick { run },
        );
    }

    /// "Go back" from the Error slide.
    pub fn reset_and_return_to_proposal(&mut self) {
        dispatch_mvi!(self, rejection, RejectionReducer, RejectionIntent::Reset);
        self.surface.set_yes_button_scale(self.rejection.yes_scale);
        self.navigate(Slide::Proposal);
    }

    /// Interpret a horizontal drag from `start_x` to `end_x`.
    pub fn handle_swipe(&mut self, start_x: f32, end_x: f32) {
        let distance = start_x - end_x;
        let threshold = self.settings.swipe_threshold_px;
        if distance > threshold {
            self.swipe(SwipeDirection::Forward);
        } else if distance < -threshold {
            self.swipe(SwipeDirection::Backward);
        } else {
            tracing::trace!(distance, "Swipe below threshold");
        }
    }

    pub fn swipe(&mut self, direction: SwipeDirection) {
        let current = self.navigation.current;
        if current == Slide::Error {
            tracing::debug!(?direction, "Swipe on the error slide ignored");
            return;
        }
        match direction {
            SwipeDirection::Forward => match current.next() {
                Some(target) => self.navigate(target),
                None => tracing::debug!("Swipe past the last slide ignored"),
            },
            SwipeDirection::Backward => self.go_back(),
        }
    }

    /// Fire every timer due at or before `now_ms`, in deadline order.
    pub fn advance_to(&mut self, now_ms: u64) {
        while let Some(timer) = self.timers.pop_due(now_ms) {
            self.fire(timer);
        }
        self.timers.settle_at(now_ms);
    }

    pub fn advance_by(&mut self, delta_ms: u64) {
        self.advance_to(self.timers.now_ms().saturating_add(delta_ms));
    }

    fn fire(&mut self, timer: DeckTimer) {
        tracing::trace!(?timer, at_ms = self.timers.now_ms(), "Timer fired");
        match timer {
            DeckTimer::Settle(target) => {
                let before = self.navigation;
                dispatch_mvi!(
                    self,
                    navigation,
                    NavigationReducer,
                    NavigationIntent::Settle { target }
                );
                if self.navigation != before {
                    tracing::info!(slide = %target, "Slide changed");
                    self.sync_slide();
                }
            }
            DeckTimer::Navigate(target) => self.navigate(target),
            DeckTimer::AutoAdvance => {
                tracing::debug!(slide = %self.navigation.current, "Auto-advance");
                self.navigate(Slide::Proposal);
            }
            DeckTimer::HideAlert { generation } => {
                // A newer alert keeps its own full display time.
                if generation == self.alert_generation && self.alert.take().is_some() {
                    self.surface.hide_alert();
                }
            }
            DeckTimer::LoadingTick { run } => self.loading_tick(run),
            DeckTimer::LoadingFinish { run } => self.finish_loading(run),
        }
    }

    fn show_alert(&mut self, title: String, message: String) {
        self.alert_generation += 1;
        self.surface.show_alert(&title, &message);
        self.alert = Some(Alert { title, message });
        self.timers.schedule(
            self.settings.timing.alert_ms,
            DeckTimer::HideAlert {
                generation: self.alert_generation,
            },
        );
    }

    fn loading_tick(&mut self, run: u64) {
        let before = self.loading;
        dispatch_mvi!(
            self,
            loading,
            LoadingReducer,
            LoadingIntent::Tick {
                run,
                step: self.settings.timing.loading_step.max(1),
                error_threshold: self.settings.timing.loading_error_threshold,
            }
        );
        if self.loading == before {
            return;
        }

        self.surface.set_loading_progress(self.loading.progress());
        if self.loading.error_visible() && !before.error_visible() {
            self.surface.set_loading_error_visible(true);
        }

        match self.loading {
            LoadingState::Running { .. } => self.timers.schedule(
                self.settings.timing.loading_tick_ms,
                DeckTimer::LoadingTick { run },
            ),
            LoadingState::Finishing { .. } => {
                tracing::debug!(run, "Loading reached 100%");
                self.timers.schedule(
                    self.settings.timing.loading_finish_delay_ms,
                    DeckTimer::LoadingFinish { run },
                );
            }
            LoadingState::Idle => {}
        }
    }

    /// Drops the overlay and forces the Error slide, skipping the settle
    /// window and any pending transition.
    ///
    /// The full slide sync runs here too, so the back button gets hidden
    /// on Error rather than staying as it was on the Proposal slide.
    fn finish_loading(&mut self, run: u64) {
        let before = self.loading;
        dispatch_mvi!(self, loading, LoadingReducer, LoadingIntent::Finish { run });
        if self.loading == before {
            return;
        }
        self.surface.hide_loading_overlay();
        dispatch_mvi!(
            self,
            navigation,
            NavigationReducer,
            NavigationIntent::Force {
                target: Slide::Error
            }
        );
        tracing::info!(run, "Loading sequence finished on the error slide");
        self.sync_slide();
    }

    fn sync_slide(&mut self) {
        let slide = self.navigation.current;
        self.surface.set_active_slide(slide);
        self.surface.set_progress_percent(slide.progress_percent());
        self.surface
            .set_back_button_visible(slide.shows_back_button());
    }

    pub fn current_slide(&self) -> Slide {
        self.navigation.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.navigation.is_transitioning()
    }

    pub fn no_clicks(&self) -> u32 {
        self.rejection.no_clicks
    }

    pub fn yes_scale(&self) -> f32 {
        self.rejection.yes_scale
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Virtual time in milliseconds since the controller was created.
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Deadline of the next pending timer, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn settings(&self) -> &DeckSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::surface::{RecordingSurface, SurfaceCommand};

    fn controller() -> SlideController<RecordingSurface> {
        SlideController::new(DeckSettings::default(), RecordingSurface::new())
    }

    #[test]
    fn starts_on_landing_with_defaults() {
        let deck = controller();
        assert_eq!(deck.current_slide(), Slide::Landing);
        assert!(!deck.is_transitioning());
        assert_eq!(deck.no_clicks(), 0);
        assert_eq!(deck.yes_scale(), 1.0);
        assert!(deck.alert().is_none());
        assert!(deck.surface().commands().is_empty());
    }

    #[test]
    fn mount_syncs_surface_once() {
        let mut deck = controller();
        deck.mount();
        deck.mount();
        assert_eq!(
            deck.surface().commands(),
            &[
                SurfaceCommand::SetActiveSlide(Slide::Landing),
                SurfaceCommand::SetProgressPercent(Slide::Landing.progress_percent()),
                SurfaceCommand::SetBackButtonVisible(false),
                SurfaceCommand::SetYesButtonScale(1.0),
            ]
        );
        assert_eq!(deck.next_deadline(), Some(5_000));
    }

    #[test]
    fn settle_happens_after_window_only() {
        let mut deck = controller();
        deck.navigate(Slide::Letter);
        deck.advance_to(299);
        assert_eq!(deck.current_slide(), Slide::Landing);
        assert!(deck.is_transitioning());
        deck.advance_to(300);
        assert_eq!(deck.current_slide(), Slide::Letter);
        assert!(!deck.is_transitioning());
    }

    #[test]
    fn second_alert_keeps_full_display_time() {
        let mut deck = controller();
        deck.handle_no();
        deck.advance_by(2_000);
        deck.handle_no();
        deck.advance_by(600);
        assert_eq!(deck.alert().map(|a| a.title.as_str()), Some("Think twice"));
        deck.advance_by(1_900);
        assert!(deck.alert().is_none());
    }

    #[test]
    fn resize_is_forwarded() {
        let mut deck = controller();
        deck.handle(DeckEvent::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!(
            deck.surface().commands(),
            &[SurfaceCommand::Resize {
                width: 120,
                height: 40
            }]
        );
    }
}
