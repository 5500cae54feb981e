//! HTTP server configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind (default: 0.0.0.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Port to listen on (default: 8080)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// Log level: 0=DEBUG, 1=INFO, 2=WARN, 3=ERROR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<u8>,

    /// Deadline for a single request's backend work, in seconds (default: 30)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Whether to answer cross-origin requests (default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors: Option<bool>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Some("0.0.0.0".to_string()),
            port: Some("8080".to_string()),
            log_level: Some(1),
            request_timeout_secs: Some(30),
            cors: Some(true),
        }
    }
}

impl ServerConfig {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or("0.0.0.0")
    }

    /// Port with fallback to 8080 when unset or unparseable
    pub fn port(&self) -> u16 {
        self.port
            .as_ref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080)
    }

    pub fn log_level(&self) -> u8 {
        self.log_level.unwrap_or(1)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(30))
    }

    pub fn cors_enabled(&self) -> bool {
        self.cors.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.log_level(), 1);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.cors_enabled());
    }

    #[test]
    fn test_server_config_serde() {
        let config = ServerConfig {
            host: None,
            port: Some("3000".to_string()),
            log_level: Some(2),
            request_timeout_secs: Some(5),
            cors: Some(false),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"port\":\"3000\""));
        assert!(!json.contains("host"));

        let parsed: ServerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.request_timeout(), Duration::from_secs(5));
        assert!(!parsed.cors_enabled());
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = ServerConfig {
            port: Some("http".to_string()),
            ..ServerConfig::default()
        };
        assert_eq!(config.port(), 8080);
    }
}
