//! Error types for Typekit API calls.

use std::result;

/// Errors that can occur while talking to the Typekit API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not parse response {body}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a failure status and an `errors` list.
    #[error("{}", .errors.first().map_or("API request failed", String::as_str))]
    Api { status: u16, errors: Vec<String> },

    #[error("API returned status {status} without an error message: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("response is missing {0}")]
    MissingField(&'static str),

    #[error("response does not match the expected shape: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Family {0} not found")]
    FamilyNotFound(String),
}

impl Error {
    /// Every error string the server reported, if this is an API failure.
    pub fn api_errors(&self) -> &[String] {
        match self {
            Error::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
