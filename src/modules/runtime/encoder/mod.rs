//! Conversion of capability results into wire JSON shapes

mod annotations;
mod table;

pub use annotations::encode_annotations;
pub use table::encode_table;

use simplejson_types::{DataPoint, TextResponse, TimeseriesResponse};

/// Encode one target's series as `{target, datapoints: [[value, time_ms], ...]}`
pub fn encode_timeseries(target: &str, points: &[DataPoint]) -> TimeseriesResponse {
    TimeseriesResponse {
        target: target.to_string(),
        datapoints: points.iter().map(DataPoint::to_pair).collect(),
    }
}

/// Encode tag keys or values as `{text}` objects, preserving order
pub fn encode_texts<I, S>(items: I) -> Vec<TextResponse>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| TextResponse::new(item.as_ref()))
        .collect()
}
