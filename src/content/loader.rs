//! Loader for the RON game configuration at startup.

use ron::Options;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

use super::data::GameConfig;
use super::validation::{ValidationError, validate_config};

/// Error type for configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("{file} has {count} invalid field(s): {list}", count = .errors.len(), list = join_errors(.errors))]
    Invalid {
        file: String,
        errors: Vec<ValidationError>,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    /// The named file was missing
    Defaults(String),
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse and validate a configuration from RON text.
pub fn parse_config(file: &str, contents: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = ron_options()
        .from_str(contents)
        .map_err(|e| ConfigError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })?;

    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(ConfigError::Invalid {
            file: file.to_string(),
            errors,
        });
    }

    Ok(config)
}

/// Load the configuration file, falling back to defaults when it is absent.
pub fn load_config(path: &Path) -> Result<(GameConfig, ConfigSource), ConfigError> {
    let file_name = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok((GameConfig::default(), ConfigSource::Defaults(file_name)));
        }
        Err(e) => {
            return Err(ConfigError::Io {
                file: file_name,
                source: e,
            });
        }
    };

    let config = parse_config(&file_name, &contents)?;
    Ok((config, ConfigSource::File(file_name)))
}
