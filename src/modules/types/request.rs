//! Request envelopes for each protocol endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use std::time::Duration;

use crate::interval::parse_interval;

/// Absolute time range of a request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Shape requested for a query target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Timeserie,
    Table,
}

/// A named query requested by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Target name passed through to the backend
    #[serde(default)]
    pub target: String,

    /// Panel-local reference id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,

    /// Requested shape (`"timeserie"` or `"table"`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
}

impl Target {
    /// Requested shape; anything other than `"table"` is a time series
    pub fn kind(&self) -> TargetKind {
        match self.target_type.as_deref() {
            Some("table") => TargetKind::Table,
            _ => TargetKind::Timeserie,
        }
    }
}

/// Ad hoc filter applied on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdhocFilter {
    pub key: String,
    pub operator: String,
    pub value: String,
}

/// `/query` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub range: TimeRange,

    /// Suggested interval as a Grafana duration string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    /// Suggested interval in milliseconds, preferred over `interval`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Upper bound hint for the number of points per series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_data_points: Option<usize>,

    pub targets: Vec<Target>,

    #[serde(default)]
    pub adhoc_filters: Vec<AdhocFilter>,
}

impl QueryRequest {
    /// Effective interval; zero when the dashboard sent none
    pub fn interval(&self) -> Result<Duration, String> {
        if let Some(ms) = self.interval_ms {
            return Ok(Duration::from_millis(ms));
        }
        match self.interval.as_deref() {
            Some(raw) if !raw.trim().is_empty() => parse_interval(raw),
            _ => Ok(Duration::ZERO),
        }
    }
}

/// `/annotations` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationsRequest {
    pub range: TimeRange,

    /// Annotation descriptor, kept as the exact text the dashboard sent
    pub annotation: Box<RawValue>,
}

/// The one descriptor member the adapter reads
#[derive(Deserialize)]
struct DescriptorQuery {
    #[serde(default)]
    query: String,
}

impl AnnotationsRequest {
    /// The descriptor's `query` member, empty if absent or not a string
    pub fn query(&self) -> String {
        serde_json::from_str::<DescriptorQuery>(self.annotation.get())
            .map(|d| d.query)
            .unwrap_or_default()
    }
}

/// `/search` envelope
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub target: String,
}

/// `/tag-values` envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagValuesRequest {
    pub key: String,
}
