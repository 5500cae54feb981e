//! Configuration loading for the Simple JSON adapter
//!
//! This crate reads YAML settings files, substitutes environment variables
//! and validates the result.

pub mod env;
pub mod validator;
pub mod yaml;

pub use validator::ConfigValidator;
pub use yaml::YamlParser;

use simplejson_core::{Settings, SimpleJsonError};
use std::path::Path;
use tracing::debug;

/// Parse a settings file from a path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Settings, SimpleJsonError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        SimpleJsonError::Config(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    parse_string(&content)
}

/// Parse settings from a string
pub fn parse_string(content: &str) -> Result<Settings, SimpleJsonError> {
    let settings = YamlParser::parse(content)?;

    ConfigValidator::new().validate(&settings)?;

    Ok(settings)
}

/// Parse the settings file if it exists, otherwise fall back to defaults
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Settings, SimpleJsonError> {
    let path = path.as_ref();
    if path.exists() {
        parse_file(path)
    } else {
        debug!("No settings file at {}, using defaults", path.display());
        Ok(Settings::default())
    }
}
