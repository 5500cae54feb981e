//! Response shapes returned to the dashboard

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::column::ColumnKind;

/// One time series in a `/query` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesResponse {
    pub target: String,
    /// `[value, time_ms]` pairs
    pub datapoints: Vec<(f64, i64)>,
}

/// Column header of a table response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnHeader {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
}

/// One table in a `/query` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableResponse {
    /// Always `"table"`
    #[serde(rename = "type")]
    pub kind: String,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl TableResponse {
    pub fn new(columns: Vec<ColumnHeader>, rows: Vec<Vec<serde_json::Value>>) -> Self {
        Self {
            kind: "table".to_string(),
            columns,
            rows,
        }
    }
}

/// A single element of a `/query` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryResult {
    Table(TableResponse),
    Timeseries(TimeseriesResponse),
}

/// A single element of an `/annotations` response
///
/// Field order matches the order the dashboard documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationResponse {
    /// Echoed annotation descriptor, byte for byte
    pub annotation: Box<RawValue>,
    /// Unix milliseconds
    pub time: i64,
    /// Shared by both halves of a region annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<u64>,
    pub title: String,
    pub text: String,
    /// Serialized as `null` when there are no tags
    pub tags: Option<Vec<String>>,
}

/// `{"text": ...}` element of tag key and tag value responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

impl TextResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timeseries_shape() {
        let response = QueryResult::Timeseries(TimeseriesResponse {
            target: "upper_75".to_string(),
            datapoints: vec![(622.0, 1450754160000), (365.5, 1450754220000)],
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "target": "upper_75",
                "datapoints": [[622.0, 1450754160000i64], [365.5, 1450754220000i64]]
            })
        );
    }

    #[test]
    fn test_table_shape() {
        let response = QueryResult::Table(TableResponse::new(
            vec![
                ColumnHeader { text: "Time".to_string(), kind: ColumnKind::Time },
                ColumnHeader { text: "Value".to_string(), kind: ColumnKind::Number },
            ],
            vec![vec![json!(1234000), json!(1.0)]],
        ));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "type": "table",
                "columns": [{ "text": "Time", "type": "time" }, { "text": "Value", "type": "number" }],
                "rows": [[1234000, 1.0]]
            })
        );
    }

    #[test]
    fn test_annotation_shape() {
        let point = AnnotationResponse {
            annotation: RawValue::from_string(r#"{"name":"query"}"#.to_string()).unwrap(),
            time: 1234000,
            region_id: None,
            title: "First Title".to_string(),
            text: "First annotation".to_string(),
            tags: None,
        };
        assert_eq!(
            serde_json::to_string(&point).unwrap(),
            r#"{"annotation":{"name":"query"},"time":1234000,"title":"First Title","text":"First annotation","tags":null}"#
        );

        let region = AnnotationResponse {
            region_id: Some(3),
            tags: Some(vec!["outage".to_string()]),
            ..point
        };
        assert_eq!(
            serde_json::to_string(&region).unwrap(),
            r#"{"annotation":{"name":"query"},"time":1234000,"regionId":3,"title":"First Title","text":"First annotation","tags":["outage"]}"#
        );
    }

    #[test]
    fn test_error_shape() {
        assert_eq!(
            serde_json::to_value(ErrorResponse::new("boom")).unwrap(),
            json!({ "error": "boom" })
        );
    }
}
