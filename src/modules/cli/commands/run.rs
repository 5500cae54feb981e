//! Run command implementation

use clap::Args;
use simplejson_core::{Settings, SimpleJsonError};
use simplejson_runtime::{CapabilityRegistry, Server};
use std::sync::Arc;

use crate::demo::DemoBackend;

/// Run command arguments
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Override server port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl RunCommand {
    /// Execute the run command
    pub async fn execute(&self, settings: Settings) -> Result<(), SimpleJsonError> {
        let settings = match self.port {
            Some(port) => settings.with_port(port),
            None => settings,
        };

        let registry = CapabilityRegistry::new().with_backend(Arc::new(DemoBackend::new()));
        Server::new(settings, registry).run().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_args() {
        let cmd = RunCommand { port: Some(8080) };
        assert_eq!(cmd.port, Some(8080));
    }
}
