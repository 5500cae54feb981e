//! Wire model for the Simple JSON datasource protocol
//!
//! This crate contains the values exchanged between a backend and the adapter
//! (data points, table columns, annotations, tags) as well as the JSON request
//! envelopes and response shapes of every protocol endpoint.

pub mod annotation;
pub mod column;
pub mod interval;
pub mod request;
pub mod response;
pub mod series;
pub mod tag;

pub use annotation::Annotation;
pub use column::{Column, ColumnKind, TableColumn};
pub use interval::parse_interval;
pub use request::{
    AdhocFilter, AnnotationsRequest, QueryRequest, SearchRequest, TagValuesRequest, Target,
    TargetKind, TimeRange,
};
pub use response::{
    AnnotationResponse, ColumnHeader, ErrorResponse, QueryResult, TableResponse, TextResponse,
    TimeseriesResponse,
};
pub use series::DataPoint;
pub use tag::{TagKey, TagValue};
