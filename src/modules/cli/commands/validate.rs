//! Validate command implementation

use clap::Args;
use simplejson_core::SimpleJsonError;
use tracing::info;

/// Validate command arguments
#[derive(Args, Debug)]
pub struct ValidateCommand {}

impl ValidateCommand {
    /// Parse and validate the settings file, printing a summary
    pub fn execute(&self, settings_path: &str) -> Result<(), SimpleJsonError> {
        let settings = simplejson_config::parse_file(settings_path)?;
        let server = settings.server();

        info!("Settings in {} are valid", settings_path);
        println!("name:            {}", settings.name);
        println!("listen:          {}:{}", server.host(), server.port());
        println!("log level:       {}", server.log_level());
        println!("request timeout: {}s", server.request_timeout().as_secs());
        println!("cors:            {}", server.cors_enabled());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: demo\nserver:\n  port: 3003").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert!(ValidateCommand {}.execute(&path).is_ok());
    }

    #[test]
    fn test_validate_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: Not Valid\n").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert!(matches!(
            ValidateCommand {}.execute(&path),
            Err(SimpleJsonError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_missing_file() {
        assert!(ValidateCommand {}.execute("/nonexistent/settings.yaml").is_err());
    }
}
