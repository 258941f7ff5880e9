//! Content domain: tests for configuration parsing and validation.

use std::path::Path;

use super::{
    ConfigError, ConfigSource, GameConfig, Rgba, load_config, parse_config, validate_config,
};

#[test]
fn test_defaults_are_valid() {
    assert!(validate_config(&GameConfig::default()).is_empty());
}

#[test]
fn test_default_movement_matches_prototype_tuning() {
    let config = GameConfig::default();
    assert_eq!(config.movement.walk_max_speed, 2.35);
    assert_eq!(config.movement.friction, 0.25);
    assert_eq!(config.dash.duration_ms, 450);
    assert_eq!(config.attack.combo_step, 32);
    assert_eq!(config.attack.combo_max, 96);
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_sections() {
    let config = parse_config(
        "inline.ron",
        "(movement: (walk_max_speed: 3.0, sprint_max_speed: 4.0))",
    )
    .unwrap();

    assert_eq!(config.movement.walk_max_speed, 3.0);
    assert_eq!(config.movement.sprint_max_speed, 4.0);
    // Untouched fields inside a named section still default.
    assert_eq!(config.movement.friction, 0.25);
    assert_eq!(config.dash, GameConfig::default().dash);
}

#[test]
fn test_optional_seed_without_some_wrapper() {
    let config = parse_config("inline.ron", "(playground: (seed: 42))").unwrap();
    assert_eq!(config.playground.seed, Some(42));
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_config("broken.ron", "(movement: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_invalid_values_are_all_reported() {
    let err = parse_config(
        "bad.ron",
        "(movement: (walk_max_speed: 0.0, sprint_max_speed: 1.0), dash: (speed_modifier: 0.0))",
    )
    .unwrap_err();

    match err {
        ConfigError::Invalid { errors, .. } => {
            let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            assert!(fields.contains(&"movement.walk_max_speed"));
            assert!(fields.contains(&"dash.speed_modifier"));
        }
        other => panic!("expected validation failure, got {other}"),
    }
}

#[test]
fn test_sprint_slower_than_walk_is_rejected() {
    let mut config = GameConfig::default();
    config.movement.sprint_max_speed = 1.0;
    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "movement.sprint_max_speed");
}

#[test]
fn test_border_needs_room_for_interior() {
    let mut config = GameConfig::default();
    config.playground.rows = 2;
    let errors = validate_config(&config);
    assert!(errors.iter().any(|e| e.field == "playground.solid_border"));

    config.playground.solid_border = false;
    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let (config, source) = load_config(Path::new("does/not/exist/game.ron")).unwrap();
    assert_eq!(config, GameConfig::default());
    assert!(matches!(source, ConfigSource::Defaults(_)));
}

#[test]
fn test_shipped_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::CONFIG_PATH);
    let (config, source) = load_config(&path).unwrap();
    assert!(matches!(source, ConfigSource::File(_)));
    assert!(config.features.attack);
}

#[test]
fn test_divisor_beyond_u32_is_a_parse_error() {
    let err = parse_config("inline.ron", "(dash: (anticipation_divisor: 4294967296))").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_palette_larger_than_tile_index_is_rejected() {
    let mut config = GameConfig::default();
    config.playground.palette = vec![Rgba(0, 0, 0, 255); 257];
    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "playground.palette");

    config.playground.palette.truncate(256);
    assert!(validate_config(&config).is_empty());
}
