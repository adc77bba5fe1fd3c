//! Configuration: TOML file under the platform config directory.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_YES_SCALE};
pub use types::{
    Config, ContentConfig, GestureConfig, LoggingConfig, ParticleConfig, RejectionStage,
    TimingConfig,
};
