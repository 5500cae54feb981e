//! Capability trait definitions

use async_trait::async_trait;
use simplejson_core::SimpleJsonError;
use simplejson_types::{
    AdhocFilter, Annotation, DataPoint, TableColumn, TagKey, TagValue, TimeRange,
};
use std::time::Duration;

use crate::context::RequestContext;

/// Arguments of a time series query for one target
#[derive(Debug, Clone, PartialEq)]
pub struct TimeseriesQuery {
    pub range: TimeRange,
    /// Suggested spacing between points; zero when unspecified
    pub interval: Duration,
    /// Upper bound hint for the number of points returned
    pub max_data_points: Option<usize>,
    pub target: String,
    pub adhoc_filters: Vec<AdhocFilter>,
}

/// Arguments of a table query for one target
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub range: TimeRange,
    pub target: String,
    pub adhoc_filters: Vec<AdhocFilter>,
}

/// Produces time series for `timeserie` targets
#[async_trait]
pub trait Querier: Send + Sync {
    /// Return the points of `args.target`, time-ascending
    async fn query(
        &self,
        ctx: &RequestContext,
        args: &TimeseriesQuery,
    ) -> Result<Vec<DataPoint>, SimpleJsonError>;
}

/// Produces tables for `table` targets
#[async_trait]
pub trait TableQuerier: Send + Sync {
    /// Return the columns of `args.target`; all columns must have equal length
    async fn query_table(
        &self,
        ctx: &RequestContext,
        args: &TableQuery,
    ) -> Result<Vec<TableColumn>, SimpleJsonError>;
}

/// Answers metric name searches from the query editor
#[async_trait]
pub trait Searcher: Send + Sync {
    async fn search(
        &self,
        ctx: &RequestContext,
        target: &str,
    ) -> Result<Vec<String>, SimpleJsonError>;
}

/// Produces annotations for a time range
#[async_trait]
pub trait Annotator: Send + Sync {
    /// `query` is the query text configured on the dashboard annotation
    async fn annotations(
        &self,
        ctx: &RequestContext,
        range: &TimeRange,
        query: &str,
    ) -> Result<Vec<Annotation>, SimpleJsonError>;
}

/// Offers keys and values for ad hoc filters
#[async_trait]
pub trait TagSearcher: Send + Sync {
    async fn tag_keys(&self, ctx: &RequestContext) -> Result<Vec<TagKey>, SimpleJsonError>;

    /// Values known for `key`; an unknown key yields no values
    async fn tag_values(
        &self,
        ctx: &RequestContext,
        key: &str,
    ) -> Result<Vec<TagValue>, SimpleJsonError>;
}
