use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Largest yes-button scale a rejection stage may ask for.
pub const MAX_YES_SCALE: f32 = 10.0;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/heartdeck/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("heartdeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Every timer interval is positive
    /// - Loading step and error threshold are percentages in 1..=100
    /// - At least one rejection stage, with scales >= 1.0 that never shrink
    /// - Gesture distances are positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timing = &self.timing;
        let intervals = [
            ("settle_ms", timing.settle_ms),
            ("auto_advance_ms", timing.auto_advance_ms),
            ("celebration_delay_ms", timing.celebration_delay_ms),
            ("alert_ms", timing.alert_ms),
            ("loading_tick_ms", timing.loading_tick_ms),
            ("loading_finish_delay_ms", timing.loading_finish_delay_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, value)| *value == 0) {
            return Err(invalid(format!("timing.{name} must be greater than zero")));
        }

        if !(1..=100).contains(&timing.loading_step) {
            return Err(invalid(format!(
                "timing.loading_step must be between 1 and 100, got {}",
                timing.loading_step
            )));
        }

        if !(1..=100).contains(&timing.loading_error_threshold) {
            return Err(invalid(format!(
                "timing.loading_error_threshold must be between 1 and 100, got {}",
                timing.loading_error_threshold
            )));
        }

        let stages = &self.content.rejections;
        if stages.is_empty() {
            return Err(invalid("At least one rejection stage must be configured".to_string()));
        }

        let mut floor = 1.0_f32;
        for (idx, stage) in stages.iter().enumerate() {
            if !stage.yes_scale.is_finite() || stage.yes_scale < floor {
                return Err(invalid(format!(
                    "Rejection stage {} scale {} must be at least {}",
                    idx + 1,
                    stage.yes_scale,
                    floor
                )));
            }
            if stage.yes_scale > MAX_YES_SCALE {
                return Err(invalid(format!(
                    "Rejection stage {} scale {} exceeds {}",
                    idx + 1,
                    stage.yes_scale,
                    MAX_YES_SCALE
                )));
            }
            floor = stage.yes_scale;
        }

        let gesture = &self.gesture;
        if !(gesture.swipe_threshold_px > 0.0) {
            return Err(invalid("gesture.swipe_threshold_px must be positive".to_string()));
        }
        if !(gesture.cell_width_px > 0.0) {
            return Err(invalid("gesture.cell_width_px must be positive".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn shrinking_ladder_is_rejected() {
        let mut config = Config::default();
        config.content.rejections[2].yes_scale = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Rejection stage 3"));
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let mut config = Config::default();
        config.gesture.swipe_threshold_px = f32::NAN;
        assert!(config.validate().is_err());
    }
}
