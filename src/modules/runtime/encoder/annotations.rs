//! Annotation encoding
//!
//! Point annotations become one object. Range annotations become two
//! consecutive objects (start, then end) sharing a region id. Region ids are
//! numbered from 1 within a single response.

use serde_json::value::RawValue;
use simplejson_types::{Annotation, AnnotationResponse};

/// Encode annotations in production order, echoing `descriptor` into each object
pub fn encode_annotations(
    descriptor: &RawValue,
    annotations: &[Annotation],
) -> Vec<AnnotationResponse> {
    let mut encoded = Vec::with_capacity(annotations.len());
    let mut next_region_id: u64 = 1;

    for annotation in annotations {
        let object = |time_ms: i64, region_id: Option<u64>| AnnotationResponse {
            annotation: descriptor.to_owned(),
            time: time_ms,
            region_id,
            title: annotation.title.clone(),
            text: annotation.text.clone(),
            tags: annotation.wire_tags(),
        };

        match annotation.region_end() {
            Some(end) => {
                let region_id = next_region_id;
                next_region_id += 1;
                encoded.push(object(annotation.time.timestamp_millis(), Some(region_id)));
                encoded.push(object(end.timestamp_millis(), Some(region_id)));
            }
            None => encoded.push(object(annotation.time.timestamp_millis(), None)),
        }
    }

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::{json, Value};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn raw(text: &str) -> Box<RawValue> {
        RawValue::from_string(text.to_string()).unwrap()
    }

    #[test]
    fn test_point_and_range_annotations() {
        let echoed = r##"{"name":"query","datasource":"yoursjsource","query":"some query","enable":true,"iconColor":"#1234"}"##;
        let descriptor = raw(echoed);
        let annotations = vec![
            Annotation::point(at(1234), "First Title", "First annotation"),
            Annotation::range(at(1235), at(1237), "Second Title", "Second annotation with range")
                .with_tags(["outage"]),
        ];

        let encoded = encode_annotations(&descriptor, &annotations);
        let encoded = serde_json::to_string(&encoded).unwrap();

        let expected = format!(
            r#"[{{"annotation":{0},"time":1234000,"title":"First Title","text":"First annotation","tags":null}},{{"annotation":{0},"time":1235000,"regionId":1,"title":"Second Title","text":"Second annotation with range","tags":["outage"]}},{{"annotation":{0},"time":1237000,"regionId":1,"title":"Second Title","text":"Second annotation with range","tags":["outage"]}}]"#,
            echoed
        );
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_region_ids_increase_per_range_only() {
        let annotations = vec![
            Annotation::range(at(10), at(20), "a", "a"),
            Annotation::point(at(25), "b", "b"),
            Annotation::range(at(30), at(40), "c", "c"),
            Annotation::range(at(50), at(60), "d", "d"),
        ];

        let encoded = encode_annotations(&raw("{}"), &annotations);
        let ids: Vec<Option<u64>> = encoded.iter().map(|a| a.region_id).collect();
        assert_eq!(
            ids,
            vec![Some(1), Some(1), None, Some(2), Some(2), Some(3), Some(3)]
        );
        let times: Vec<i64> = encoded.iter().map(|a| a.time).collect();
        assert_eq!(
            times,
            vec![10_000, 20_000, 25_000, 30_000, 40_000, 50_000, 60_000]
        );
    }

    #[test]
    fn test_numbering_restarts_per_response() {
        let annotations = vec![Annotation::range(at(1), at(2), "a", "a")];
        let first = encode_annotations(&raw("{}"), &annotations);
        let second = encode_annotations(&raw("{}"), &annotations);
        assert_eq!(first[0].region_id, Some(1));
        assert_eq!(second[0].region_id, Some(1));
    }

    #[test]
    fn test_tags_null_only_when_empty() {
        let annotations = vec![
            Annotation::point(at(1), "untagged", ""),
            Annotation::point(at(2), "tagged", "").with_tags(["b", "a"]),
        ];
        let text = serde_json::to_string(&encode_annotations(&raw("{}"), &annotations)).unwrap();
        let encoded: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(encoded[0]["tags"], Value::Null);
        assert_eq!(encoded[1]["tags"], json!(["b", "a"]));
        assert!(encoded[0].get("regionId").is_none());
    }

    #[test]
    fn test_empty_end_is_point() {
        let annotations = vec![Annotation::range(at(5), at(5), "same", "")];
        let encoded = encode_annotations(&raw("{}"), &annotations);
        assert_eq!(encoded.len(), 1);
        assert_eq!(encoded[0].region_id, None);
    }

    #[test]
    fn test_descriptor_numbers_untouched() {
        let descriptor = raw(r#"{"query":"q", "limit":1.50,"big":123456789012345678901234}"#);
        let annotations = vec![Annotation::point(at(1), "t", "")];

        let encoded = encode_annotations(&descriptor, &annotations);
        let encoded = serde_json::to_string(&encoded).unwrap();
        assert!(encoded.starts_with(
            r#"[{"annotation":{"query":"q", "limit":1.50,"big":123456789012345678901234},"time":1000,"#
        ));
    }
}
