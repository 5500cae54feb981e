//! Table column definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of values held by a table column, as reported in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Timestamps, encoded as Unix milliseconds
    Time,
    /// Free text
    String,
    /// Floating point numbers
    Number,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Time => write!(f, "time"),
            ColumnKind::String => write!(f, "string"),
            ColumnKind::Number => write!(f, "number"),
        }
    }
}

impl FromStr for ColumnKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "time" => Ok(ColumnKind::Time),
            "string" => Ok(ColumnKind::String),
            "number" => Ok(ColumnKind::Number),
            _ => Err(format!("Unknown column type: {}", s)),
        }
    }
}

/// Values of a single table column
///
/// Producers emit already-tagged data; the variant is only consulted for the
/// column's `type` field and for cell encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Time(Vec<DateTime<Utc>>),
    String(Vec<String>),
    Number(Vec<f64>),
}

impl Column {
    /// The kind reported for this column
    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Time(_) => ColumnKind::Time,
            Column::String(_) => ColumnKind::String,
            Column::Number(_) => ColumnKind::Number,
        }
    }

    /// Number of values (rows) in this column
    pub fn len(&self) -> usize {
        match self {
            Column::Time(values) => values.len(),
            Column::String(values) => values.len(),
            Column::Number(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// JSON cell value at `row`, or `None` past the end of the column
    pub fn cell(&self, row: usize) -> Option<serde_json::Value> {
        match self {
            Column::Time(values) => values
                .get(row)
                .map(|t| serde_json::Value::from(t.timestamp_millis())),
            Column::String(values) => values.get(row).map(|s| serde_json::Value::from(s.as_str())),
            // Non-finite numbers become null
            Column::Number(values) => values.get(row).map(|n| serde_json::Value::from(*n)),
        }
    }
}

/// A labelled table column
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    /// Column header text
    pub text: String,
    /// Column values
    pub data: Column,
}

impl TableColumn {
    pub fn new(text: impl Into<String>, data: Column) -> Self {
        Self {
            text: text.into(),
            data,
        }
    }

    pub fn time(text: impl Into<String>, values: Vec<DateTime<Utc>>) -> Self {
        Self::new(text, Column::Time(values))
    }

    pub fn string(text: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(text, Column::String(values))
    }

    pub fn number(text: impl Into<String>, values: Vec<f64>) -> Self {
        Self::new(text, Column::Number(values))
    }
}
