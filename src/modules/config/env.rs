//! Environment variable substitution

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use simplejson_core::SimpleJsonError;

/// Placeholder pattern: `${VAR}` or `${VAR:-default}`
static ENV_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").unwrap()
});

/// Replaces environment placeholders in configuration text
pub struct EnvSubstitutor {
    /// Whether to load a `.env` file before substituting
    load_dotenv: bool,
}

impl EnvSubstitutor {
    /// Create a substitutor that also reads `.env`
    pub fn new() -> Self {
        Self { load_dotenv: true }
    }

    /// Create a substitutor that only consults the process environment
    pub fn process_only() -> Self {
        Self { load_dotenv: false }
    }

    /// Substitute every placeholder, failing with all unset names at once
    pub fn substitute(&self, content: &str) -> Result<String, SimpleJsonError> {
        if self.load_dotenv {
            // A missing .env is fine
            let _ = dotenvy::dotenv();
        }

        let mut missing: Vec<String> = Vec::new();
        let result = ENV_PATTERN.replace_all(content, |caps: &Captures<'_>| {
            let name = &caps[1];
            match (std::env::var(name), caps.get(2)) {
                (Ok(value), _) => value,
                (Err(_), Some(default)) => default.as_str().to_string(),
                (Err(_), None) => {
                    if !missing.iter().any(|m| m == name) {
                        missing.push(name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });

        if !missing.is_empty() {
            return Err(SimpleJsonError::EnvVarNotFound(missing.join(", ")));
        }

        Ok(result.into_owned())
    }

    /// Names referenced by placeholders in `content`
    pub fn referenced_vars(content: &str) -> Vec<String> {
        ENV_PATTERN
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect()
    }
}

impl Default for EnvSubstitutor {
    fn default() -> Self {
        Self::new()
    }
}
