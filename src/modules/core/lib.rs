//! Core definitions for the Simple JSON adapter
//!
//! This crate contains the error taxonomy shared by every layer and the
//! configuration model the server is started from.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::SimpleJsonError;
