//! Per-request context handed to capabilities

use simplejson_core::SimpleJsonError;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Deadline and cancellation state of one inbound request
///
/// The token is cancelled when the deadline fires or when the inbound
/// request is dropped, so backends that spawn work can stop early.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Uuid,
    timeout: Duration,
    deadline: Instant,
    cancellation: CancellationToken,
}

impl RequestContext {
    /// Create a context whose deadline is `timeout` from now
    pub fn new(timeout: Duration) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            timeout,
            deadline: Instant::now() + timeout,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left before the deadline
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Await a capability call, giving up once the deadline fires
    pub async fn run<F, T>(&self, call: F) -> Result<T, SimpleJsonError>
    where
        F: Future<Output = Result<T, SimpleJsonError>>,
    {
        match tokio::time::timeout_at(self.deadline, call).await {
            Ok(result) => result,
            Err(_) => {
                self.cancellation.cancel();
                Err(SimpleJsonError::DeadlineExceeded(self.timeout.as_millis()))
            }
        }
    }
}
