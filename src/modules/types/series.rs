//! Time series values

use chrono::{DateTime, Utc};

/// A single sample of a time series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }

    /// Wire form `[value, time_ms]`
    pub fn to_pair(&self) -> (f64, i64) {
        (self.value, self.time.timestamp_millis())
    }
}
