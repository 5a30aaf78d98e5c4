//! Error types for rbdl

use thiserror::Error;

/// Main error type for rbdl
#[derive(Error, Debug)]
pub enum RbdlError {
    #[error("{0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("making request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("reading response: {0}")]
    ReadBody(reqwest::Error),

    #[error("rate limit exceeded (429): too many requests. Wait 10-60 seconds before retrying")]
    RateLimited,

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid JSON response: {0}")]
    InvalidJson(serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("unable to parse API response: {0}")]
    Parse(serde_json::Error),

    #[error("no results in API response")]
    NoResults,

    /// Malformed document met while re-reading a response for output
    #[error("{0}")]
    Decode(serde_json::Error),

    /// Failure while turning the response back into records
    #[error("parsing JSON: {0}")]
    ParseJson(Box<RbdlError>),

    #[error("no data to write")]
    NoData,

    #[error("formatting JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("writing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("writing file: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while talking to the API
    #[error("Error fetching data: {0}")]
    Fetch(Box<RbdlError>),

    /// Failure while serializing or writing the output file
    #[error("Error saving file: {0}")]
    Save(Box<RbdlError>),
}

impl RbdlError {
    /// Wrap an error from the fetch stage
    pub fn fetch(err: RbdlError) -> Self {
        RbdlError::Fetch(Box::new(err))
    }

    /// Wrap an error from re-reading the response before output
    pub fn parsing_json(err: RbdlError) -> Self {
        RbdlError::ParseJson(Box::new(err))
    }

    /// Wrap an error from the save stage
    pub fn save(err: RbdlError) -> Self {
        RbdlError::Save(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, RbdlError>;
