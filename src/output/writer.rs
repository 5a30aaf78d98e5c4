//! Serialize a fetched response and persist it

use std::path::Path;
use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::errors::RbdlError;
use crate::fs::write_output;
use crate::output::json::{format_records, reformat_response};
use crate::records::parse_records;
use crate::table::format_as_csv;

/// Render `data` in `format` and write it to `path`
pub fn save_to_file(path: &Path, data: &[u8], format: OutputFormat, on_air_only: bool) -> Result<(), RbdlError> {
    let contents = render(data, format, on_air_only)?;
    write_output(path, &contents)
}

/// Render the API response in the requested format
///
/// Unfiltered JSON is the response re-indented with sorted keys. Filtered
/// JSON and all CSV go through record parsing, so an empty result set is an
/// error there.
pub fn render(data: &[u8], format: OutputFormat, on_air_only: bool) -> Result<Vec<u8>, RbdlError> {
    debug!(%format, on_air_only, "Rendering output");

    match format {
        OutputFormat::Json if !on_air_only => reformat_response(data),
        OutputFormat::Json => {
            let records = parse_records(data, true).map_err(RbdlError::parsing_json)?;
            if records.is_empty() {
                warn!("No on-air repeaters matched; writing an empty result set");
            }
            format_records(&records)
        }
        OutputFormat::Csv => {
            let records = parse_records(data, on_air_only).map_err(RbdlError::parsing_json)?;
            format_as_csv(&records)
        }
    }
}
