//! Output file naming and serialization

pub mod filename;
pub mod json;
pub mod writer;

// Re-exports
pub use filename::generate_filename;
pub use writer::{render, save_to_file};
