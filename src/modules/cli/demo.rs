//! Demonstration backend implementing every capability

use async_trait::async_trait;
use chrono::{Duration, Utc};
use simplejson_core::SimpleJsonError;
use simplejson_runtime::{
    Annotator, Querier, RequestContext, Searcher, TableQuerier, TableQuery, TagSearcher,
    TimeseriesQuery,
};
use simplejson_types::{Annotation, DataPoint, TableColumn, TagKey, TagValue, TimeRange};
use tracing::debug;

const METRICS: [&str; 3] = ["example1", "example2", "example3"];
const TAG_KEY: &str = "mykey";

/// Backend serving small fixed data sets
#[derive(Debug, Default, Clone)]
pub struct DemoBackend;

impl DemoBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Querier for DemoBackend {
    async fn query(
        &self,
        ctx: &RequestContext,
        args: &TimeseriesQuery,
    ) -> Result<Vec<DataPoint>, SimpleJsonError> {
        debug!(request_id = %ctx.request_id(), "Demo series for '{}'", args.target);
        let now = Utc::now();
        Ok(vec![
            DataPoint::new(now - Duration::seconds(5), 1234.0),
            DataPoint::new(now, 1500.0),
        ])
    }
}

#[async_trait]
impl TableQuerier for DemoBackend {
    async fn query_table(
        &self,
        _ctx: &RequestContext,
        args: &TableQuery,
    ) -> Result<Vec<TableColumn>, SimpleJsonError> {
        Ok(vec![
            TableColumn::time("Time", vec![args.range.to]),
            TableColumn::string("SomeText", vec![args.target.clone()]),
            TableColumn::number("Value", vec![1.0]),
        ])
    }
}

#[async_trait]
impl Searcher for DemoBackend {
    async fn search(
        &self,
        _ctx: &RequestContext,
        target: &str,
    ) -> Result<Vec<String>, SimpleJsonError> {
        Ok(METRICS
            .iter()
            .filter(|m| m.contains(target))
            .map(|m| m.to_string())
            .collect())
    }
}

#[async_trait]
impl Annotator for DemoBackend {
    async fn annotations(
        &self,
        _ctx: &RequestContext,
        range: &TimeRange,
        query: &str,
    ) -> Result<Vec<Annotation>, SimpleJsonError> {
        let span = range.to - range.from;
        let at = |fraction: i32| range.from + span / 4 * fraction;

        Ok(vec![
            Annotation::point(at(1), "First Title", format!("Point annotation for '{}'", query)),
            Annotation::range(at(2), at(3), "Second Title", "Annotation with range")
                .with_tags(["outage"]),
        ])
    }
}

#[async_trait]
impl TagSearcher for DemoBackend {
    async fn tag_keys(&self, _ctx: &RequestContext) -> Result<Vec<TagKey>, SimpleJsonError> {
        Ok(vec![TagKey::new(TAG_KEY)])
    }

    async fn tag_values(
        &self,
        _ctx: &RequestContext,
        key: &str,
    ) -> Result<Vec<TagValue>, SimpleJsonError> {
        if key != TAG_KEY {
            return Ok(Vec::new());
        }
        Ok(vec![TagValue::new("value1"), TagValue::new("value2")])
    }
}
