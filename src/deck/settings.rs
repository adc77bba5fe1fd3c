use crate::config::{Config, RejectionStage, TimingConfig};

/// The slice of [`Config`] the controller needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSettings {
    pub timing: TimingConfig,
    pub swipe_threshold_px: f32,
    pub rejections: Vec<RejectionStage>,
}

impl DeckSettings {
    /// Yes-button scale for each rejection stage, in order.
    pub fn scale_ladder(&self) -> Vec<f32> {
        self.rejections.iter().map(|stage| stage.yes_scale).collect()
    }
}

impl From<&Config> for DeckSettings {
    fn from(config: &Config) -> Self {
        Self {
            timing: config.timing.clone(),
            swipe_threshold_px: config.gesture.swipe_threshold_px,
            rejections: config.content.rejections.clone(),
        }
    }
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}
