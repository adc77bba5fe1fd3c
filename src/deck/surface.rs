//! The command set the controller drives a presentation with.

use crate::deck::slide::Slide;

/// A passive display the controller sends commands to.
///
/// Implementations render; they never call back into the controller and
/// must not assume anything about the order of commands beyond what each
/// one says.
pub trait PresentationSurface {
    fn set_active_slide(&mut self, slide: Slide);

    fn set_progress_percent(&mut self, percent: f32);

    fn set_back_button_visible(&mut self, visible: bool);

    fn set_yes_button_scale(&mut self, scale: f32);

    /// Replaces whatever alert is currently shown.
    fn show_alert(&mut self, title: &str, message: &str);

    fn hide_alert(&mut self);

    fn show_loading_overlay(&mut self);

    fn set_loading_progress(&mut self, percent: u8);

    fn set_loading_error_visible(&mut self, visible: bool);

    fn hide_loading_overlay(&mut self);

    /// Fire-and-forget burst; has no effect on deck state.
    fn spawn_celebration_particles(&mut self, count: usize);

    /// Viewport changed. Only decorative layers care.
    fn resize(&mut self, _width: u16, _height: u16) {}
}

/// One outbound command, as recorded by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    SetActiveSlide(Slide),
    SetProgressPercent(f32),
    SetBackButtonVisible(bool),
    SetYesButtonScale(f32),
    ShowAlert { title: String, message: String },
    HideAlert,
    ShowLoadingOverlay,
    SetLoadingProgress(u8),
    SetLoadingErrorVisible(bool),
    HideLoadingOverlay,
    SpawnCelebrationParticles(usize),
    Resize { width: u16, height: u16 },
}

/// Surface that keeps every command it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Hand over everything recorded so far and start a fresh log.
    pub fn take(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn contains(&self, command: &SurfaceCommand) -> bool {
        self.commands.contains(command)
    }

    /// Slide from the most recent `SetActiveSlide`.
    pub fn last_active_slide(&self) -> Option<Slide> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            SurfaceCommand::SetActiveSlide(slide) => Some(*slide),
            _ => None,
        })
    }

    /// Every loading progress value sent, in order.
    pub fn loading_progress_values(&self) -> Vec<u8> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                SurfaceCommand::SetLoadingProgress(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, command: SurfaceCommand) {
        tracing::trace!(?command, "surface command");
        self.commands.push(command);
    }
}

impl PresentationSurface for RecordingSurface {
    fn set_active_slide(&mut self, slide: Slide) {
        self.record(SurfaceCommand::SetActiveSlide(slide));
    }

    fn set_progress_percent(&mut self, percent: f32) {
        self.record(SurfaceCommand::SetProgressPercent(percent));
    }

    fn set_back_button_visible(&mut self, visible: bool) {
        self.record(SurfaceCommand::SetBackButtonVisible(visible));
    }

    fn set_yes_button_scale(&mut self, scale: f32) {
        self.record(SurfaceCommand::SetYesButtonScale(scale));
    }

    fn show_alert(&mut self, title: &str, message: &str) {
        self.record(SurfaceCommand::ShowAlert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn hide_alert(&mut self) {
        self.record(SurfaceCommand::HideAlert);
    }

    fn show_loading_overlay(&mut self) {
        self.record(SurfaceCommand::ShowLoadingOverlay);
    }

    fn set_loading_progress(&mut self, percent: u8) {
        self.record(SurfaceCommand::SetLoadingProgress(percent));
    }

    fn set_loading_error_visible(&mut self, visible: bool) {
        self.record(SurfaceCommand::SetLoadingErrorVisible(visible));
    }

    fn hide_loading_overlay(&mut self) {
        self.record(SurfaceCommand::HideLoadingOverlay);
    }

    fn spawn_celebration_particles(&mut self, count: usize) {
        self.record(SurfaceCommand::SpawnCelebrationParticles(count));
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.record(SurfaceCommand::Resize { width, height });
    }
}
