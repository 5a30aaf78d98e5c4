//! Automatic output file naming
//!
//! `repeaterbook[_state_S][_country_C][_mode_M][_freq_F]_YYYYMMDD_HHMMSS.ext`

use chrono::{DateTime, TimeZone};
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::fs::sanitize_filename;
use crate::request::SearchFilters;

const FILENAME_PREFIX: &str = "repeaterbook";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Build a file name from the search parameters and `now`
pub fn generate_filename<Tz>(filters: &SearchFilters, format: OutputFormat, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut name = String::from(FILENAME_PREFIX);

    let parts = [
        ("state", &filters.state_id),
        ("country", &filters.country),
        ("mode", &filters.mode),
        ("freq", &filters.frequency),
    ];

    for (label, value) in parts {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            name.push('_');
            name.push_str(label);
            name.push('_');
            name.push_str(&sanitize_filename(value));
        }
    }

    name.push('_');
    name.push_str(&now.format(TIMESTAMP_FORMAT).to_string());
    name.push_str(format.extension());

    PathBuf::from(name)
}
