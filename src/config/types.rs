use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub particles: ParticleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Delays and rates of every timed side effect, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Settle window between a navigation request and the slide swap (default: 300).
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Delay from mount to the automatic move to the proposal (default: 5000).
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// Delay from "Yes" to the letter (default: 1200).
    #[serde(default = "default_celebration_delay_ms")]
    pub celebration_delay_ms: u64,
    /// How long an alert stays up (default: 2500).
    #[serde(default = "default_alert_ms")]
    pub alert_ms: u64,
    /// Loading bar tick interval (default: 30).
    #[serde(default = "default_loading_tick_ms")]
    pub loading_tick_ms: u64,
    /// Percent added per loading tick (default: 2).
    #[serde(default = "default_loading_step")]
    pub loading_step: u8,
    /// Progress at which the loading error line appears (default: 50).
    #[serde(default = "default_loading_error_threshold")]
    pub loading_error_threshold: u8,
    /// Pause between 100% and the error slide (default: 500).
    #[serde(default = "default_loading_finish_delay_ms")]
    pub loading_finish_delay_ms: u64,
    /// Hearts released by one celebration (default: 60).
    #[serde(default = "default_celebration_particles")]
    pub celebration_particles: usize,
}

/// Swipe recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Minimum horizontal travel for a swipe, in pixels (default: 50).
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f32,
    /// Pixels per terminal column when mouse drags stand in for touches (default: 8).
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: f32,
}

/// One rung of the rejection ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionStage {
    pub title: String,
    pub message: String,
    /// Scale applied to the yes button at this stage.
    pub yes_scale: f32,
}

/// Copy shown on the slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default = "default_sender")]
    pub sender: String,
    #[serde(default = "default_question")]
    pub question: String,
    /// Alerts and scales for the first, second, third... "No".
    #[serde(default = "default_rejections")]
    pub rejections: Vec<RejectionStage>,
    #[serde(default = "default_loading_message")]
    pub loading_message: String,
    #[serde(default = "default_loading_error")]
    pub loading_error: String,
    #[serde(default = "default_letter")]
    pub letter: Vec<String>,
    #[serde(default = "default_gallery")]
    pub gallery: Vec<String>,
    #[serde(default = "default_messages")]
    pub messages: Vec<String>,
}

/// Decorative background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Drifting dots behind the slides (default: 80).
    #[serde(default = "default_ambient_count")]
    pub ambient_count: usize,
}

/// Log output. The terminal belongs to the deck, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; falls back to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_settle_ms() -> u64 {
    300
}

fn default_auto_advance_ms() -> u64 {
    5_000
}

fn default_celebration_delay_ms() -> u64 {
    1_200
}

fn default_alert_ms() -> u64 {
    2_500
}

fn default_loading_tick_ms() -> u64 {
    30
}

fn default_loading_step() -> u8 {
    2
}

fn default_loading_error_threshold() -> u8 {
    50
}

fn default_loading_finish_delay_ms() -> u64 {
    500
}

fn default_celebration_particles() -> usize {
    60
}

fn default_swipe_threshold_px() -> f32 {
    50.0
}

fn default_cell_width_px() -> f32 {
    8.0
}

fn default_recipient() -> String {
    "My Love".to_string()
}

fn default_sender() -> String {
    "Me".to_string()
}

fn default_question() -> String {
    "Will You Be My Valentine?".to_string()
}

fn default_rejections() -> Vec<RejectionStage> {
    vec![
        RejectionStage {
            title: "Are you certain?".to_string(),
            message: "Consider this carefully...".to_string(),
            yes_scale: 1.4,
        },
        RejectionStage {
            title: "Think twice".to_string(),
            message: "The answer is becoming clearer...".to_string(),
            yes_scale: 2.0,
        },
        RejectionStage {
            title: "Final chance".to_string(),
            message: "Your heart knows the truth...".to_string(),
            yes_scale: 3.0,
        },
    ]
}

fn default_loading_message() -> String {
    "Processing your answer...".to_string()
}

fn default_loading_error() -> String {
    "Error detected".to_string()
}

fn default_letter() -> Vec<String> {
    vec![
        "From the very first moment I saw you, I knew there was something extraordinary about you.".to_string(),
        "Every day with you is a gift I treasure. With you, everything makes sense.".to_string(),
        "I want to walk beside you through every chapter ahead.".to_string(),
        "Thank you for being exactly who you are.".to_string(),
    ]
}

fn default_gallery() -> Vec<String> {
    (1..=6).map(|n| format!("Memory {n}")).collect()
}

fn default_messages() -> Vec<String> {
    vec![
        "Your smile is my favorite notification".to_string(),
        "You are peace in human form".to_string(),
        "I choose you. Today. Tomorrow. Always".to_string(),
        "You are my best decision".to_string(),
    ]
}

fn default_ambient_count() -> usize {
    80
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            auto_advance_ms: default_auto_advance_ms(),
            celebration_delay_ms: default_celebration_delay_ms(),
            alert_ms: default_alert_ms(),
            loading_tick_ms: default_loading_tick_ms(),
            loading_step: default_loading_step(),
            loading_error_threshold: default_loading_error_threshold(),
            loading_finish_delay_ms: default_loading_finish_delay_ms(),
            celebration_particles: default_celebration_particles(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold_px(),
            cell_width_px: default_cell_width_px(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            sender: default_sender(),
            question: default_question(),
            rejections: default_rejections(),
            loading_message: default_loading_message(),
            loading_error: default_loading_error(),
            letter: default_letter(),
            gallery: default_gallery(),
            messages: default_messages(),
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            ambient_count: default_ambient_count(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Configured log file, or `<cache dir>/heartdeck/heartdeck.log`.
    pub fn resolved_file(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
            cache_dir.join("heartdeck").join("heartdeck.log")
        })
    }
}
