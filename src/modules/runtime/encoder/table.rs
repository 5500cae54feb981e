//! Table encoding

use serde_json::Value;
use simplejson_core::SimpleJsonError;
use simplejson_types::{ColumnHeader, TableColumn, TableResponse};

/// Encode columns as `{type: "table", columns, rows}`
///
/// Rows are the positional zip of every column's values, so all columns must
/// hold the same number of values; misaligned tables are rejected.
pub fn encode_table(columns: &[TableColumn]) -> Result<TableResponse, SimpleJsonError> {
    let row_count = columns.first().map(|c| c.data.len()).unwrap_or(0);

    if let Some(misaligned) = columns.iter().find(|c| c.data.len() != row_count) {
        return Err(SimpleJsonError::InvalidTable(format!(
            "column '{}' has {} values, expected {}",
            misaligned.text,
            misaligned.data.len(),
            row_count
        )));
    }

    let headers = columns
        .iter()
        .map(|c| ColumnHeader {
            text: c.text.clone(),
            kind: c.data.kind(),
        })
        .collect();

    let rows = (0..row_count)
        .map(|row| {
            columns
                .iter()
                .map(|c| c.data.cell(row).unwrap_or(Value::Null))
                .collect()
        })
        .collect();

    Ok(TableResponse::new(headers, rows))
}
