//! simplejson CLI
//!
//! Serves a Grafana Simple JSON datasource backed by demonstration data.

use clap::Parser;
use simplejson_cli::{Cli, Commands};
use simplejson_core::SimpleJsonError;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Map the settings log level (0=DEBUG .. 3=ERROR) to a tracing level
fn level_from_setting(level: u8) -> Level {
    match level {
        0 => Level::DEBUG,
        1 => Level::INFO,
        2 => Level::WARN,
        _ => Level::ERROR,
    }
}

async fn run() -> Result<(), SimpleJsonError> {
    let cli = Cli::parse();
    let settings_path = cli.settings_path().to_string();
    let explicit_path = cli.settings_path_explicit();
    let verbose = cli.verbose;

    match cli.command {
        Commands::Validate(cmd) => {
            init_logging(if verbose { Level::DEBUG } else { Level::INFO });
            cmd.execute(&settings_path)?;
        }
        Commands::Run(cmd) => {
            let settings = if explicit_path {
                simplejson_config::parse_file(&settings_path)?
            } else {
                simplejson_config::load_or_default(&settings_path)?
            };

            let log_level = if verbose {
                Level::DEBUG
            } else {
                level_from_setting(settings.log_level())
            };
            init_logging(log_level);

            cmd.execute(settings).await?;
        }
    }

    Ok(())
}

fn init_logging(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
