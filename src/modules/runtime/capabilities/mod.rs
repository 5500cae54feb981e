//! Backend capabilities
//!
//! A backend implements any subset of five narrow contracts and installs
//! them into a [`CapabilityRegistry`] once at startup.

mod registry;
mod traits;

pub use registry::{Capability, CapabilityRegistry, Registration};
pub use traits::{
    Annotator, Querier, Searcher, TableQuerier, TableQuery, TagSearcher, TimeseriesQuery,
};
