//! Shared runtime application state (HTTP handlers)

use std::sync::Arc;
use std::time::Duration;

use crate::context::RequestContext;
use crate::dispatcher::Dispatcher;

/// Application state shared across handlers
///
/// Read-only after startup, so requests never contend on it.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>, request_timeout: Duration) -> Self {
        Self {
            dispatcher,
            request_timeout,
        }
    }

    /// Fresh context for one inbound request
    pub fn context(&self) -> RequestContext {
        RequestContext::new(self.request_timeout)
    }
}
