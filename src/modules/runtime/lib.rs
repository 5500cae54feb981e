//! Runtime for the Simple JSON adapter
//!
//! This crate provides the capability contracts a backend implements, the
//! registry holding them, the dispatcher and encoder that turn protocol
//! requests into capability calls and wire JSON, and the HTTP server.

pub mod capabilities;
pub mod context;
pub mod dispatcher;
pub mod encoder;
pub mod handlers;
pub mod server;
pub mod state;

pub use capabilities::{
    Annotator, Capability, CapabilityRegistry, Querier, Registration, Searcher, TableQuerier,
    TableQuery, TagSearcher, TimeseriesQuery,
};
pub use context::RequestContext;
pub use dispatcher::Dispatcher;
pub use server::Server;
pub use state::AppState;
