//! Error types for the Simple JSON adapter

use thiserror::Error;

/// Main error type for adapter operations
#[derive(Error, Debug)]
pub enum SimpleJsonError {
    /// Request body could not be decoded or misses a required field
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// No endpoint at the requested path
    #[error("Not found: {0}")]
    NotFound(String),

    /// The endpoint exists but does not accept the request method
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Interval string in a query envelope could not be parsed
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// A backend capability reported a failure
    #[error("{0}")]
    Capability(String),

    /// A table produced by a backend has misaligned columns
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// The request deadline fired before the backend answered
    #[error("Request deadline exceeded after {0} ms")]
    DeadlineExceeded(u128),

    /// Configuration file parsing error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Environment variable referenced by the configuration is not set
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimpleJsonError {
    /// Shorthand for backends reporting a failure
    pub fn capability(message: impl Into<String>) -> Self {
        SimpleJsonError::Capability(message.into())
    }

    /// Returns true if this error should be logged at error level
    pub fn is_error(&self) -> bool {
        !self.is_client_error()
    }

    /// Returns true if this error is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SimpleJsonError::MalformedRequest(_)
                | SimpleJsonError::InvalidInterval(_)
                | SimpleJsonError::NotFound(_)
                | SimpleJsonError::MethodNotAllowed(_)
        )
    }

    /// Returns the appropriate HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            SimpleJsonError::MalformedRequest(_) | SimpleJsonError::InvalidInterval(_) => 400,
            SimpleJsonError::NotFound(_) => 404,
            SimpleJsonError::MethodNotAllowed(_) => 405,
            SimpleJsonError::DeadlineExceeded(_) => 504,
            _ => 500,
        }
    }
}

impl From<anyhow::Error> for SimpleJsonError {
    fn from(err: anyhow::Error) -> Self {
        SimpleJsonError::Capability(format!("{:#}", err))
    }
}

/// Result type alias using SimpleJsonError
pub type Result<T> = std::result::Result<T, SimpleJsonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(SimpleJsonError::MalformedRequest("eof".into()).status_code(), 400);
        assert_eq!(SimpleJsonError::InvalidInterval("5x".into()).status_code(), 400);
        assert_eq!(SimpleJsonError::capability("backend down").status_code(), 500);
        assert_eq!(SimpleJsonError::InvalidTable("short".into()).status_code(), 500);
        assert_eq!(SimpleJsonError::DeadlineExceeded(30_000).status_code(), 504);
        assert_eq!(SimpleJsonError::NotFound("/nope".into()).status_code(), 404);
        assert_eq!(SimpleJsonError::MethodNotAllowed("PUT /query".into()).status_code(), 405);
    }

    #[test]
    fn test_capability_message_is_verbatim() {
        let err = SimpleJsonError::capability("backend down");
        assert_eq!(err.to_string(), "backend down");
    }

    #[test]
    fn test_error_is_client_error() {
        assert!(SimpleJsonError::MalformedRequest("eof".into()).is_client_error());
        assert!(SimpleJsonError::NotFound("/nope".into()).is_client_error());
        assert!(!SimpleJsonError::capability("boom").is_client_error());
        assert!(SimpleJsonError::capability("boom").is_error());
    }

    #[test]
    fn test_from_anyhow_keeps_context() {
        let err: SimpleJsonError = anyhow::anyhow!("connection refused")
            .context("fetching series")
            .into();
        assert_eq!(err.to_string(), "fetching series: connection refused");
    }
}
