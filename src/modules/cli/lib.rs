//! Simple JSON datasource CLI
//!
//! This crate provides the `simplejson` command-line interface:
//! - run: Serve the demonstration backend over the Simple JSON protocol
//! - validate: Check a settings file

pub mod commands;
pub mod demo;

pub use commands::{Cli, Commands};
pub use demo::DemoBackend;
