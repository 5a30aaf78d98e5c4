//! Response normalization and the on-air filter
//!
//! The export API answers with `{"count": N, "results": [ {...}, ... ]}`.
//! Records stay as untyped JSON maps since the field set differs between
//! countries and service types.

use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::errors::RbdlError;

/// A single repeater entry, keyed by the API's field names
pub type Record = Map<String, JsonValue>;

/// Field holding the operational status of a repeater
pub const OPERATIONAL_STATUS_FIELD: &str = "Operational Status";

/// Status value of a repeater that is currently on the air
pub const ON_AIR_STATUS: &str = "On-air";

/// Field holding the repeater list in an export response
const RESULTS_FIELD: &str = "results";

/// Decode the `results` list, optionally keeping only on-air repeaters
///
/// An absent, null or empty `results` list is an error; a filter that
/// removes every record is not.
pub fn parse_records(data: &[u8], on_air_only: bool) -> Result<Vec<Record>, RbdlError> {
    // The envelope must be an object; arrays are not read positionally.
    let mut response: Map<String, JsonValue> = serde_json::from_slice(data).map_err(RbdlError::Parse)?;

    let records: Vec<Record> = match response.remove(RESULTS_FIELD) {
        None | Some(JsonValue::Null) => Vec::new(),
        Some(results) => serde_json::from_value(results).map_err(RbdlError::Parse)?,
    };

    if records.is_empty() {
        return Err(RbdlError::NoResults);
    }

    if !on_air_only {
        return Ok(records);
    }

    let total = records.len();
    let filtered: Vec<Record> = records.into_iter().filter(is_on_air).collect();
    debug!(total, kept = filtered.len(), "Applied on-air filter");

    Ok(filtered)
}

/// True when the record's operational status is exactly `On-air`
pub fn is_on_air(record: &Record) -> bool {
    record
        .get(OPERATIONAL_STATUS_FIELD)
        .and_then(JsonValue::as_str)
        .is_some_and(|status| status == ON_AIR_STATUS)
}
