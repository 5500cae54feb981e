//! Configuration model

mod server;
mod settings;

pub use server::ServerConfig;
pub use settings::Settings;
