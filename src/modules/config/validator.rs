//! Settings validation

use once_cell::sync::Lazy;
use regex::Regex;
use simplejson_core::{ServerConfig, Settings, SimpleJsonError};

/// Valid datasource names (lower-kebab-case or lower_snake_case)
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(?:[-_][a-z0-9]+)*$").unwrap());

/// Settings validator
pub struct ConfigValidator {
    /// Whether to validate names strictly
    strict_names: bool,
}

impl ConfigValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self { strict_names: true }
    }

    /// Create a validator with lenient name checking
    pub fn lenient() -> Self {
        Self {
            strict_names: false,
        }
    }

    /// Validate the whole settings tree
    pub fn validate(&self, settings: &Settings) -> Result<(), SimpleJsonError> {
        self.validate_name(&settings.name)?;
        if let Some(server) = &settings.server {
            self.validate_server(server)?;
        }
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<(), SimpleJsonError> {
        if name.is_empty() {
            return Err(SimpleJsonError::Validation(
                "Datasource name cannot be empty".to_string(),
            ));
        }

        if self.strict_names && !NAME_PATTERN.is_match(name) {
            return Err(SimpleJsonError::Validation(format!(
                "Invalid datasource name '{}': must be lower-kebab-case or lower_snake_case",
                name
            )));
        }

        Ok(())
    }

    fn validate_server(&self, server: &ServerConfig) -> Result<(), SimpleJsonError> {
        if let Some(port) = &server.port {
            match port.parse::<u16>() {
                Ok(0) | Err(_) => {
                    return Err(SimpleJsonError::Validation(format!(
                        "Invalid port '{}': must be a number between 1 and 65535",
                        port
                    )));
                }
                Ok(_) => {}
            }
        }

        if let Some(level) = server.log_level {
            if level > 3 {
                return Err(SimpleJsonError::Validation(format!(
                    "Invalid log_level {}: must be 0 (DEBUG) to 3 (ERROR)",
                    level
                )));
            }
        }

        if server.request_timeout_secs == Some(0) {
            return Err(SimpleJsonError::Validation(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if let Some(host) = &server.host {
            if host.trim().is_empty() {
                return Err(SimpleJsonError::Validation(
                    "host cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
