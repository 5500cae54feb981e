//! Root settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ServerConfig;

/// Root configuration of a datasource adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the datasource, used in logs
    pub name: String,

    /// Server configuration (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Settings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            server: None,
        }
    }

    /// Server section, or defaults when absent
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn port(&self) -> u16 {
        self.server.as_ref().map(ServerConfig::port).unwrap_or(8080)
    }

    pub fn log_level(&self) -> u8 {
        self.server.as_ref().map(ServerConfig::log_level).unwrap_or(1)
    }

    pub fn request_timeout(&self) -> Duration {
        self.server().request_timeout()
    }

    /// Override the listening port, creating the server section if needed
    pub fn with_port(mut self, port: u16) -> Self {
        self.server
            .get_or_insert_with(ServerConfig::default)
            .port = Some(port.to_string());
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new("simplejson")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.name, "simplejson");
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.log_level(), 1);
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_with_port_without_server() {
        let settings = Settings::new("test").with_port(3000);
        assert_eq!(settings.port(), 3000);
        assert_eq!(settings.server.unwrap().log_level, Some(1));
    }

    #[test]
    fn test_with_port_keeps_existing_server() {
        let settings = Settings {
            name: "test".to_string(),
            server: Some(ServerConfig {
                log_level: Some(3),
                ..ServerConfig::default()
            }),
        }
        .with_port(9000);
        assert_eq!(settings.port(), 9000);
        assert_eq!(settings.log_level(), 3);
    }
}
