//! Post-processing argument logic
//!
//! Turns parsed CLI arguments into validated settings: the contact email is
//! required, and the output format falls back to the output file extension.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::{Args, OutputFormat, DEFAULT_ENDPOINT};
use crate::errors::RbdlError;
use crate::request::SearchFilters;

const EMAIL_REQUIRED: &str =
    "email is required (use --email flag or set a RBDL_EMAIL environment variable)";

/// Processed arguments ready for fetching and saving
#[derive(Debug, Clone)]
pub struct ProcessedArgs {
    /// Contact email sent in the User-Agent
    pub email: String,
    /// Resolved output format
    pub format: OutputFormat,
    /// Explicit output path, if any
    pub output: Option<PathBuf>,
    /// Keep only on-air records
    pub on_air: bool,
    /// Search parameters
    pub filters: SearchFilters,
    /// API endpoint
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
}

/// Process raw CLI arguments into a usable form
pub fn process_args(args: &Args) -> Result<ProcessedArgs, RbdlError> {
    let email = args
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| RbdlError::Validation(EMAIL_REQUIRED.to_string()))?
        .to_string();

    if !args.timeout.is_finite() || args.timeout <= 0.0 {
        return Err(RbdlError::Validation(format!(
            "timeout must be a positive number of seconds, got {}",
            args.timeout
        )));
    }

    let endpoint = args
        .endpoint
        .clone()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let output = args
        .output
        .as_deref()
        .filter(|o| !o.is_empty())
        .map(PathBuf::from);

    Ok(ProcessedArgs {
        email,
        format: resolve_format(args.format, output.as_deref()),
        output,
        on_air: args.on_air,
        filters: SearchFilters::from_args(args),
        endpoint,
        timeout: Duration::from_secs_f64(args.timeout),
    })
}

/// Pick the output format: explicit choice first, then the output file
/// extension (`.csv` means CSV, anything else JSON)
pub fn resolve_format(format: Option<OutputFormat>, output: Option<&Path>) -> OutputFormat {
    if let Some(format) = format {
        return format;
    }

    let ext = output
        .and_then(|p| p.extension())
        .map(|e| e.to_string_lossy().to_lowercase());

    match ext.as_deref() {
        Some("csv") => OutputFormat::Csv,
        _ => OutputFormat::Json,
    }
}
