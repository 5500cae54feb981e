//! CLI commands

mod run;
mod validate;

pub use run::RunCommand;
pub use validate::ValidateCommand;

use clap::{Parser, Subcommand};

/// simplejson - Grafana Simple JSON datasource server
#[derive(Parser, Debug)]
#[command(name = "simplejson")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file path
    ///
    /// This is a *global* option so it can be specified after subcommands,
    /// e.g. `simplejson run -f settings.yaml`.
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the demonstration backend
    Run(RunCommand),

    /// Validate a settings file
    Validate(ValidateCommand),
}

/// Settings file used when `-f` is not given
pub const DEFAULT_SETTINGS_FILE: &str = "simplejson.yaml";

impl Cli {
    /// Effective settings path
    pub fn settings_path(&self) -> &str {
        self.file.as_deref().unwrap_or(DEFAULT_SETTINGS_FILE)
    }

    /// Whether the settings path was given explicitly
    pub fn settings_path_explicit(&self) -> bool {
        self.file.is_some()
    }
}
