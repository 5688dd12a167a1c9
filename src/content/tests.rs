//! Content domain: tests for RON tuning parsing and validation.

use super::{ContentLoadError, GameplayDefaults, parse_gameplay_defaults};
use crate::movement::{ConfigError, CooldownBoundary, MovementConfig};

#[test]
fn test_empty_file_uses_defaults() {
    let defaults = parse_gameplay_defaults("()", "inline").expect("empty struct parses");
    assert_eq!(defaults, GameplayDefaults::default());
}

#[test]
fn test_partial_movement_section() {
    let ron = r#"(
        schema_version: 1,
        movement: (
            speed: 5.0,
            jump_impulse: 10.0,
            dash_speed: 20.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            cooldown_boundary: Exclusive,
        ),
    )"#;

    let defaults = parse_gameplay_defaults(ron, "inline").expect("valid tuning");
    assert_eq!(defaults.schema_version, 1);
    assert_eq!(defaults.movement.speed, 5.0);
    assert_eq!(defaults.movement.dash_cooldown, 1.0);
    assert_eq!(
        defaults.movement.cooldown_boundary,
        CooldownBoundary::Exclusive
    );
    // Untouched fields keep their defaults
    assert_eq!(
        defaults.movement.wall_slide_speed,
        MovementConfig::default().wall_slide_speed
    );
}

#[test]
fn test_negative_magnitude_is_rejected() {
    let ron = "(movement: (wall_slide_speed: -1.0))";

    match parse_gameplay_defaults(ron, "inline") {
        Err(ContentLoadError::Movement { source, .. }) => {
            assert_eq!(
                source,
                ConfigError::Negative {
                    field: "wall_slide_speed",
                    value: -1.0
                }
            );
        }
        other => panic!("expected movement error, got {:?}", other),
    }
}

#[test]
fn test_camera_smoothing_out_of_range() {
    let ron = "(camera: (horizontal_smoothing: 1.5))";
    assert!(matches!(
        parse_gameplay_defaults(ron, "inline"),
        Err(ContentLoadError::Invalid {
            field: "camera.horizontal_smoothing",
            ..
        })
    ));
}

#[test]
fn test_zero_max_health_rejected() {
    let ron = "(health: (max_health: 0.0))";
    assert!(matches!(
        parse_gameplay_defaults(ron, "inline"),
        Err(ContentLoadError::Invalid {
            field: "health.max_health",
            ..
        })
    ));
}

#[test]
fn test_syntax_error_reports_file() {
    let err = parse_gameplay_defaults("(movement: ", "broken.ron").unwrap_err();
    assert!(matches!(err, ContentLoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_shipped_tuning_file_is_valid() {
    let contents = include_str!("../../assets/data/gameplay_defaults.ron");
    parse_gameplay_defaults(contents, "gameplay_defaults.ron").expect("shipped tuning parses");
}
