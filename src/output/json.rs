//! Tab-indented JSON output

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Value as JsonValue};

use crate::errors::RbdlError;
use crate::records::Record;

const INDENT: &[u8] = b"\t";

/// Serialize `value` pretty-printed with one tab per level
pub fn to_tab_indented<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, RbdlError> {
    let mut output = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
    value.serialize(&mut serializer)?;
    Ok(output)
}

/// Sort object keys at every nesting level
pub fn sort_keys_recursive(value: &mut JsonValue) {
    match value {
        JsonValue::Object(map) => {
            map.sort_keys();
            map.values_mut().for_each(sort_keys_recursive);
        }
        JsonValue::Array(items) => items.iter_mut().for_each(sort_keys_recursive),
        _ => {}
    }
}

/// Re-indent a raw API response with keys in sorted order
pub fn reformat_response(data: &[u8]) -> Result<Vec<u8>, RbdlError> {
    let mut value: JsonValue = serde_json::from_slice(data)
        .map_err(|e| RbdlError::parsing_json(RbdlError::Decode(e)))?;
    sort_keys_recursive(&mut value);
    to_tab_indented(&value)
}

/// Rebuild the response envelope around filtered records
pub fn format_records(records: &[Record]) -> Result<Vec<u8>, RbdlError> {
    let mut response = json!({
        "count": records.len(),
        "results": records,
    });
    sort_keys_recursive(&mut response);
    to_tab_indented(&response)
}
