//! rbdl library interface
//!
//! Downloads repeater listings from the RepeaterBook export API and saves
//! them as JSON or CSV.
//!
//! # Module Organization
//!
//! - [`cli`] - Argument definitions and validation
//! - [`request`] - Search filters and query URL construction
//! - [`client`] - The single HTTP fetch
//! - [`records`] - Response normalization and the on-air filter
//! - [`output`] / [`table`] - JSON and CSV serialization
//! - [`errors`] - Error types (RbdlError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic

pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod output;
pub mod records;
pub mod request;
pub mod status;
pub mod table;
