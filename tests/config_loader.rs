use heartdeck::config::{Config, ConfigError, MAX_YES_SCALE};
use heartdeck::deck::DeckSettings;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    path
}

/// Test that Config::default() carries the timings the deck is built around.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.timing.settle_ms, 300);
    assert_eq!(config.timing.auto_advance_ms, 5_000);
    assert_eq!(config.timing.celebration_delay_ms, 1_200);
    assert_eq!(config.timing.alert_ms, 2_500);
    assert_eq!(config.timing.loading_tick_ms, 30);
    assert_eq!(config.timing.loading_step, 2);
    assert_eq!(config.timing.loading_error_threshold, 50);
    assert_eq!(config.timing.loading_finish_delay_ms, 500);
    assert_eq!(config.timing.celebration_particles, 60);
    assert_eq!(config.gesture.swipe_threshold_px, 50.0);
    assert_eq!(config.particles.ambient_count, 80);
    assert_eq!(config.content.rejections.len(), 3);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("heartdeck/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_merges_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[timing]
settle_ms = 150

[content]
recipient = "Sam"
sender = "Alex"

[[content.rejections]]
title = "Really?"
message = "Think again"
yes_scale = 1.5

[[content.rejections]]
title = "Last one"
message = "Please"
yes_scale = 2.5
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.timing.settle_ms, 150);
    assert_eq!(config.timing.auto_advance_ms, 5_000);
    assert_eq!(config.content.recipient, "Sam");
    assert_eq!(config.content.sender, "Alex");
    assert_eq!(config.content.gallery.len(), 6);

    let settings = DeckSettings::from(&config);
    assert_eq!(settings.scale_ladder(), vec![1.5, 2.5]);
    assert_eq!(settings.timing.settle_ms, 150);
}

#[test]
fn test_parse_error_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[timing\nsettle_ms = 1");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_wrong_type_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[timing]\nsettle_ms = \"soon\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_fails_for_zero_interval() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[timing]\nloading_tick_ms = 0\n");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("loading_tick_ms"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_fails_empty_rejections() {
    let mut config = Config::default();
    config.content.rejections.clear();

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("At least one rejection stage"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_out_of_range_percentages() {
    let mut config = Config::default();
    config.timing.loading_step = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.timing.loading_error_threshold = 101;
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_rejects_shrinking_scale() {
    let mut config = Config::default();
    config.content.rejections[0].yes_scale = 0.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_printed_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.content.recipient = "Robin".to_string();
    let path = write_config(&dir, &toml::to_string_pretty(&config).unwrap());

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_validation_caps_yes_scale() {
    let mut config = Config::default();
    config.content.rejections[2].yes_scale = MAX_YES_SCALE;
    assert!(config.validate().is_ok());

    config.content.rejections[2].yes_scale = 10_000.0;
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("Rejection stage 3"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}
