//! HTTP request building and sending
//!
//! One GET against the export API. The API identifies callers by a
//! `User-Agent` carrying the contact email; there is no other authentication.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use crate::errors::RbdlError;

/// `User-Agent` prefix; the caller's email is appended
pub const USER_AGENT_PREFIX: &str = "RepeaterbookDL CLI (beta)";

/// Build the `User-Agent` value for `email`
pub fn user_agent(email: &str) -> String {
    format!("{}, {}", USER_AGENT_PREFIX, email)
}

/// Build the HTTP client
fn build_client(email: &str, timeout: Duration) -> Result<Client, RbdlError> {
    let client = Client::builder()
        .user_agent(user_agent(email))
        .timeout(timeout)
        .build()?;

    Ok(client)
}

/// Fetch `url` and return the raw body once it is known to be valid JSON
pub async fn fetch_repeaters(url: &Url, email: &str, timeout: Duration) -> Result<Vec<u8>, RbdlError> {
    let client = build_client(email, timeout)?;

    debug!(url = %url, timeout_secs = timeout.as_secs_f64(), "Sending request");
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    debug!(status = status.as_u16(), "Response received");

    if status != StatusCode::OK {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(RbdlError::RateLimited);
        }
        let body = response.text().await.unwrap_or_default();
        return Err(RbdlError::Status { status: status.as_u16(), body });
    }

    let body = response.bytes().await.map_err(RbdlError::ReadBody)?;
    validate_json(&body)?;

    info!(bytes = body.len(), "Received repeater data");
    Ok(body.to_vec())
}

/// Check that `data` is a well-formed JSON document
pub fn validate_json(data: &[u8]) -> Result<(), RbdlError> {
    serde_json::from_slice::<serde::de::IgnoredAny>(data)
        .map(|_| ())
        .map_err(RbdlError::InvalidJson)
}
