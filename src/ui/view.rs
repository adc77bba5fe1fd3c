//! Terminal view model: the surface the controller drives in the real app.

use crate::deck::{PresentationSurface, Slide};
use crate::ui::particles::ParticleField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingView {
    pub progress: u8,
    pub error_visible: bool,
}

/// Everything the renderer needs, updated only through surface commands.
pub struct DeckView {
    slide: Slide,
    progress_percent: f32,
    back_visible: bool,
    yes_scale: f32,
    alert: Option<AlertView>,
    loading: Option<LoadingView>,
    /// Error flag can arrive while the overlay is hidden.
    loading_error: bool,
    particles: ParticleField,
}

impl DeckView {
    pub fn new(particle_count: usize, width: u16, height: u16) -> Self {
        Self::with_particles(ParticleField::new(particle_count, width, height))
    }

    pub fn with_particles(particles: ParticleField) -> Self {
        Self {
            slide: Slide::default(),
            progress_percent: Slide::default().progress_percent(),
            back_visible: false,
            yes_scale: 1.0,
            alert: None,
            loading: None,
            loading_error: false,
            particles,
        }
    }

    /// Animate decorative layers up to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        self.particles.tick(now_ms);
    }

    pub fn slide(&self) -> Slide {
        self.slide
    }

    pub fn progress_percent(&self) -> f32 {
        self.progress_percent
    }

    pub fn back_visible(&self) -> bool {
        self.back_visible
    }

    pub fn yes_scale(&self) -> f32 {
        self.yes_scale
    }

    pub fn alert(&self) -> Option<&AlertView> {
        self.alert.as_ref()
    }

    pub fn loading(&self) -> Option<LoadingView> {
        self.loading
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }
}

impl PresentationSurface for DeckView {
    fn set_active_slide(&mut self, slide: Slide) {
        self.slide = slide;
    }

    fn set_progress_percent(&mut self, percent: f32) {
        self.progress_percent = percent.clamp(0.0, 100.0);
    }

    fn set_back_button_visible(&mut self, visible: bool) {
        self.back_visible = visible;
    }

    fn set_yes_button_scale(&mut self, scale: f32) {
        self.yes_scale = scale;
    }

    fn show_alert(&mut self, title: &str, message: &str) {
        self.alert = Some(AlertView {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn hide_alert(&mut self) {
        self.alert = None;
    }

    fn show_loading_overlay(&mut self) {
        self.loading = Some(LoadingView {
            progress: 0,
            error_visible: self.loading_error,
        });
    }

    fn set_loading_progress(&mut self, percent: u8) {
        if let Some(loading) = self.loading.as_mut() {
            loading.progress = percent.min(100);
        }
    }

    fn set_loading_error_visible(&mut self, visible: bool) {
        self.loading_error = visible;
        if let Some(loading) = self.loading.as_mut() {
            loading.error_visible = visible;
        }
    }

    fn hide_loading_overlay(&mut self) {
        self.loading = None;
    }

    fn spawn_celebration_particles(&mut self, count: usize) {
        self.particles.burst(count);
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.particles.resize(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> DeckView {
        DeckView::with_particles(ParticleField::with_seed(0, 0, 80, 24))
    }

    #[test]
    fn alert_replaces_previous() {
        let mut view = view();
        view.show_alert("First", "one");
        view.show_alert("Second", "two");
        assert_eq!(view.alert().map(|a| a.title.as_str()), Some("Second"));
        view.hide_alert();
        assert!(view.alert().is_none());
    }

    #[test]
    fn loading_overlay_tracks_progress_and_error() {
        let mut view = view();
        view.set_loading_progress(40);
        assert!(view.loading().is_none());

        view.show_loading_overlay();
        view.set_loading_progress(52);
        view.set_loading_error_visible(true);
        assert_eq!(
            view.loading(),
            Some(LoadingView {
                progress: 52,
                error_visible: true
            })
        );
        view.hide_loading_overlay();
        assert!(view.loading().is_none());
    }

    #[test]
    fn celebration_feeds_particles() {
        let mut view = view();
        view.spawn_celebration_particles(60);
        assert_eq!(view.particles().pending_hearts(), 60);
    }
}
