//! YAML settings parser

use serde::Deserialize;
use simplejson_core::{ServerConfig, Settings, SimpleJsonError};

use crate::env::EnvSubstitutor;

/// YAML parser for settings files
pub struct YamlParser;

/// On-disk schema; scalars are accepted loosely (`port: 8080` or `port: "8080"`)
#[derive(Debug, Deserialize)]
struct RawSettings {
    name: String,

    #[serde(default)]
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    #[serde(default)]
    host: Option<serde_yaml::Value>,

    #[serde(default)]
    port: Option<serde_yaml::Value>,

    #[serde(default)]
    log_level: Option<u8>,

    #[serde(default)]
    request_timeout_secs: Option<u64>,

    #[serde(default)]
    cors: Option<bool>,
}

impl YamlParser {
    /// Parse a YAML string into settings, substituting environment variables first
    pub fn parse(content: &str) -> Result<Settings, SimpleJsonError> {
        let substituted = EnvSubstitutor::new().substitute(content)?;
        Self::parse_raw(&substituted)
    }

    /// Parse a YAML string without environment variable substitution
    pub fn parse_raw(content: &str) -> Result<Settings, SimpleJsonError> {
        let raw = serde_yaml::from_str::<RawSettings>(content)
            .map_err(|e| SimpleJsonError::Config(format!("YAML parse error: {}", e)))?;

        let server = raw.server.map(|s| ServerConfig {
            host: s.host.and_then(yaml_scalar_to_string),
            port: s.port.and_then(yaml_scalar_to_string),
            log_level: s.log_level,
            request_timeout_secs: s.request_timeout_secs,
            cors: s.cors,
        });

        Ok(Settings {
            name: raw.name,
            server,
        })
    }
}

fn yaml_scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Null => None,
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s),
        other => serde_yaml::to_string(&other)
            .ok()
            .map(|s| s.trim().to_string()),
    }
}
