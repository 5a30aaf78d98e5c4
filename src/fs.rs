//! Filesystem utilities
//!
//! Output path naming and writing.

use sanitize_filename::Options as SanitizeOptions;
use std::path::Path;
use tracing::info;

use crate::errors::RbdlError;

/// Sanitize a filename component for safe filesystem usage
///
/// Path separators and characters invalid on Windows become `_`, so a
/// search value such as `A/B` cannot escape the output directory.
pub fn sanitize_filename(name: &str) -> String {
    sanitize_filename::sanitize_with_options(name, SanitizeOptions {
        replacement: "_",
        windows: true,
        truncate: true,
    })
}

/// Write `contents` to `path`, replacing any existing file
pub fn write_output(path: &Path, contents: &[u8]) -> Result<(), RbdlError> {
    std::fs::write(path, contents)?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote output file");
    Ok(())
}
