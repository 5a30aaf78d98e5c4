//! HTTP client functionality

pub mod http;

// Re-exports
pub use http::{fetch_repeaters, user_agent, validate_json, USER_AGENT_PREFIX};
