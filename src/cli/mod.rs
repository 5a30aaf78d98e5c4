//! CLI argument parsing and processing

pub mod args;
pub mod process;

// Re-exports
pub use args::{Args, LogFormat, OutputFormat};
pub use process::{process_args, resolve_format, ProcessedArgs};
