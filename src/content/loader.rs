//! Loader for the RON tuning file at startup.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::data::GameplayDefaults;
use crate::movement::ConfigError;

/// Error type for tuning load failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load {file}: Parse error: {message}")]
    Parse { file: String, message: String },

    #[error("Invalid movement tuning in {file}: {source}")]
    Movement {
        file: String,
        #[source]
        source: ConfigError,
    },

    #[error("Invalid {field} in {file}: {message}")]
    Invalid {
        file: String,
        field: &'static str,
        message: String,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate tuning from RON text. `file` only labels errors.
pub fn parse_gameplay_defaults(
    contents: &str,
    file: &str,
) -> Result<GameplayDefaults, ContentLoadError> {
    let defaults: GameplayDefaults =
        ron_options()
            .from_str(contents)
            .map_err(|e| ContentLoadError::Parse {
                file: file.to_string(),
                message: e.to_string(),
            })?;

    validate(defaults, file)
}

/// Load gameplay_defaults.ron from `path`.
pub fn load_gameplay_defaults(path: &Path) -> Result<GameplayDefaults, ContentLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file.clone(),
        source,
    })?;

    parse_gameplay_defaults(&contents, &file)
}

fn validate(
    mut defaults: GameplayDefaults,
    file: &str,
) -> Result<GameplayDefaults, ContentLoadError> {
    defaults.movement =
        defaults
            .movement
            .validated()
            .map_err(|source| ContentLoadError::Movement {
                file: file.to_string(),
                source,
            })?;

    let invalid = |field: &'static str, message: String| ContentLoadError::Invalid {
        file: file.to_string(),
        field,
        message,
    };

    let camera = &defaults.camera;
    for (field, value) in [
        ("camera.horizontal_smoothing", camera.horizontal_smoothing),
        ("camera.vertical_smoothing", camera.vertical_smoothing),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(invalid(field, format!("expected 0.0..=1.0, got {}", value)));
        }
    }

    if !(defaults.health.max_health.is_finite() && defaults.health.max_health > 0.0) {
        return Err(invalid(
            "health.max_health",
            format!("expected a positive number, got {}", defaults.health.max_health),
        ));
    }

    Ok(defaults)
}
