//! CSV output for repeater records
//!
//! Records do not share a fixed field set, so the header is the sorted union
//! of every key seen across all records.

use serde_json::Value as JsonValue;
use std::collections::BTreeSet;
use std::io::Write;

use crate::errors::RbdlError;
use crate::records::Record;

/// Format records as CSV bytes
pub fn format_as_csv(records: &[Record]) -> Result<Vec<u8>, RbdlError> {
    let mut output = Vec::new();
    write_csv(records, &mut output)?;
    Ok(output)
}

/// Write records as CSV directly to a writer
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<(), RbdlError> {
    if records.is_empty() {
        return Err(RbdlError::NoData);
    }

    let columns = collect_columns(records);
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(&columns)?;

    for record in records {
        let row = columns.iter().map(|col| {
            record
                .get(col)
                .map(format_csv_value)
                .unwrap_or_default()
        });
        csv_writer.write_record(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Sorted union of keys across all records
pub fn collect_columns(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Format a JSON value for a CSV cell
fn format_csv_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(_) | JsonValue::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
