//! Request dispatch
//!
//! Maps each protocol operation to its capability, invokes it under the
//! request's deadline and encodes the result. A missing capability is not an
//! error: the operation answers with an empty result instead.

use futures::future::try_join_all;
use simplejson_core::SimpleJsonError;
use simplejson_types::{
    AnnotationResponse, AnnotationsRequest, QueryRequest, QueryResult, SearchRequest,
    TagValuesRequest, Target, TargetKind, TextResponse,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::capabilities::{CapabilityRegistry, TableQuery, TimeseriesQuery};
use crate::context::RequestContext;
use crate::encoder::{encode_annotations, encode_table, encode_texts, encode_timeseries};

/// Dispatches decoded requests to the registered capabilities
pub struct Dispatcher {
    registry: Arc<CapabilityRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<CapabilityRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Answer `/query`: one element per target whose shape has a capability
    ///
    /// Targets are queried concurrently and emitted in envelope order. The
    /// first failing target aborts the whole request.
    pub async fn query(
        &self,
        ctx: &RequestContext,
        request: &QueryRequest,
    ) -> Result<Vec<QueryResult>, SimpleJsonError> {
        let interval = request
            .interval()
            .map_err(SimpleJsonError::InvalidInterval)?;

        let calls = request
            .targets
            .iter()
            .map(|target| self.query_target(ctx, request, interval, target));

        let results = ctx.run(try_join_all(calls)).await?;
        Ok(results.into_iter().flatten().collect())
    }

    async fn query_target(
        &self,
        ctx: &RequestContext,
        request: &QueryRequest,
        interval: Duration,
        target: &Target,
    ) -> Result<Option<QueryResult>, SimpleJsonError> {
        match target.kind() {
            TargetKind::Timeserie => {
                let Some(querier) = self.registry.querier() else {
                    debug!("No query capability, skipping target '{}'", target.target);
                    return Ok(None);
                };

                let args = TimeseriesQuery {
                    range: request.range,
                    interval,
                    max_data_points: request.max_data_points,
                    target: target.target.clone(),
                    adhoc_filters: request.adhoc_filters.clone(),
                };
                let points = querier.query(ctx, &args).await?;

                if let Some(max) = args.max_data_points {
                    if points.len() > max {
                        warn!(
                            "Target '{}' returned {} points, more than the requested maximum of {}",
                            target.target,
                            points.len(),
                            max
                        );
                    }
                }

                Ok(Some(QueryResult::Timeseries(encode_timeseries(
                    &target.target,
                    &points,
                ))))
            }
            TargetKind::Table => {
                let Some(table_querier) = self.registry.table_querier() else {
                    debug!("No table-query capability, skipping target '{}'", target.target);
                    return Ok(None);
                };

                let args = TableQuery {
                    range: request.range,
                    target: target.target.clone(),
                    adhoc_filters: request.adhoc_filters.clone(),
                };
                let columns = table_querier.query_table(ctx, &args).await?;

                Ok(Some(QueryResult::Table(encode_table(&columns)?)))
            }
        }
    }

    /// Answer `/search` with the backend's names, unmodified
    pub async fn search(
        &self,
        ctx: &RequestContext,
        request: &SearchRequest,
    ) -> Result<Vec<String>, SimpleJsonError> {
        let Some(searcher) = self.registry.searcher() else {
            return Ok(Vec::new());
        };

        ctx.run(searcher.search(ctx, &request.target)).await
    }

    /// Answer `/annotations`, splitting range annotations into regions
    pub async fn annotations(
        &self,
        ctx: &RequestContext,
        request: &AnnotationsRequest,
    ) -> Result<Vec<AnnotationResponse>, SimpleJsonError> {
        let Some(annotator) = self.registry.annotator() else {
            return Ok(Vec::new());
        };

        let query = request.query();
        let annotations = ctx
            .run(annotator.annotations(ctx, &request.range, &query))
            .await?;

        Ok(encode_annotations(&request.annotation, &annotations))
    }

    /// Answer `/tag-keys`
    pub async fn tag_keys(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<TextResponse>, SimpleJsonError> {
        let Some(tag_searcher) = self.registry.tag_searcher() else {
            return Ok(Vec::new());
        };

        let keys = ctx.run(tag_searcher.tag_keys(ctx)).await?;
        Ok(encode_texts(keys.iter().map(|k| k.as_str())))
    }

    /// Answer `/tag-values` for one key
    pub async fn tag_values(
        &self,
        ctx: &RequestContext,
        request: &TagValuesRequest,
    ) -> Result<Vec<TextResponse>, SimpleJsonError> {
        let Some(tag_searcher) = self.registry.tag_searcher() else {
            return Ok(Vec::new());
        };

        let values = ctx.run(tag_searcher.tag_values(ctx, &request.key)).await?;
        Ok(encode_texts(values.iter().map(|v| v.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use simplejson_types::{DataPoint, TableColumn};
    use std::sync::Mutex;

    use crate::capabilities::{Querier, TableQuerier};

    /// Records every target it is asked for and fails on "broken"
    #[derive(Default)]
    struct RecordingQuerier {
        seen: Mutex<Vec<TimeseriesQuery>>,
    }

    #[async_trait]
    impl Querier for RecordingQuerier {
        async fn query(
            &self,
            _ctx: &RequestContext,
            args: &TimeseriesQuery,
        ) -> Result<Vec<DataPoint>, SimpleJsonError> {
            self.seen.lock().unwrap().push(args.clone());
            if args.target == "broken" {
                return Err(SimpleJsonError::capability("series unavailable"));
            }
            Ok(vec![DataPoint::new(Utc.timestamp_opt(60, 0).unwrap(), 1.0)])
        }
    }

    struct OneRowTable;

    #[async_trait]
    impl TableQuerier for OneRowTable {
        async fn query_table(
            &self,
            _ctx: &RequestContext,
            args: &TableQuery,
        ) -> Result<Vec<TableColumn>, SimpleJsonError> {
            Ok(vec![TableColumn::string("Target", vec![args.target.clone()])])
        }
    }

    fn query_request(targets: serde_json::Value) -> QueryRequest {
        serde_json::from_value(json!({
            "range": { "from": "2016-10-31T06:33:44Z", "to": "2016-10-31T12:33:44Z" },
            "interval": "30s",
            "maxDataPoints": 100,
            "targets": targets
        }))
        .unwrap()
    }

    fn ctx() -> RequestContext {
        RequestContext::new(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_query_mixed_shapes_in_target_order() {
        let registry = CapabilityRegistry::new()
            .with_querier(RecordingQuerier::default())
            .with_table_querier(OneRowTable);
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let request = query_request(json!([
            { "target": "a", "type": "table" },
            { "target": "b", "type": "timeserie" },
            { "target": "c" }
        ]));
        let results = dispatcher.query(&ctx(), &request).await.unwrap();

        assert_eq!(results.len(), 3);
        assert!(matches!(&results[0], QueryResult::Table(t) if t.rows == vec![vec![json!("a")]]));
        assert!(matches!(&results[1], QueryResult::Timeseries(s) if s.target == "b"));
        assert!(matches!(&results[2], QueryResult::Timeseries(s) if s.target == "c"));
    }

    #[tokio::test]
    async fn test_query_passes_arguments() {
        let querier = Arc::new(RecordingQuerier::default());
        let registry = CapabilityRegistry::from_registrations([
            crate::capabilities::Registration::Querier(querier.clone()),
        ]);
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let request = query_request(json!([{ "target": "upper_50" }]));
        dispatcher.query(&ctx(), &request).await.unwrap();

        let seen = querier.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].target, "upper_50");
        assert_eq!(seen[0].interval, Duration::from_secs(30));
        assert_eq!(seen[0].max_data_points, Some(100));
        assert_eq!(seen[0].range, request.range);
    }

    #[tokio::test]
    async fn test_query_skips_targets_without_capability() {
        let registry = CapabilityRegistry::new().with_table_querier(OneRowTable);
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let request = query_request(json!([
            { "target": "series", "type": "timeserie" },
            { "target": "table", "type": "table" }
        ]));
        let results = dispatcher.query(&ctx(), &request).await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], QueryResult::Table(_)));
    }

    #[tokio::test]
    async fn test_query_without_capabilities_is_empty() {
        let dispatcher = Dispatcher::new(Arc::new(CapabilityRegistry::new()));
        let request = query_request(json!([{ "target": "a" }, { "target": "b", "type": "table" }]));
        assert!(dispatcher.query(&ctx(), &request).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_failure_aborts_request() {
        let registry = CapabilityRegistry::new().with_querier(RecordingQuerier::default());
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let request = query_request(json!([{ "target": "fine" }, { "target": "broken" }]));
        let err = dispatcher.query(&ctx(), &request).await.unwrap_err();
        assert_eq!(err.to_string(), "series unavailable");
    }

    #[tokio::test]
    async fn test_query_invalid_interval() {
        let dispatcher = Dispatcher::new(Arc::new(CapabilityRegistry::new()));
        let mut request = query_request(json!([]));
        request.interval = Some("often".to_string());
        let err = dispatcher.query(&ctx(), &request).await.unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_absent_capabilities_answer_empty() {
        let dispatcher = Dispatcher::new(Arc::new(CapabilityRegistry::new()));
        let ctx = ctx();

        let search = dispatcher.search(&ctx, &SearchRequest::default()).await.unwrap();
        assert!(search.is_empty());

        let annotations: AnnotationsRequest = serde_json::from_str(
            r#"{
                "range": { "from": "2016-10-31T06:33:44Z", "to": "2016-10-31T12:33:44Z" },
                "annotation": { "query": "deploys" }
            }"#,
        )
        .unwrap();
        assert!(dispatcher.annotations(&ctx, &annotations).await.unwrap().is_empty());

        assert!(dispatcher.tag_keys(&ctx).await.unwrap().is_empty());
        let values = TagValuesRequest { key: "host".to_string() };
        assert!(dispatcher.tag_values(&ctx, &values).await.unwrap().is_empty());
    }
}
