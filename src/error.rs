//! Error types for the news API client.

use crate::request::Endpoint;
use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while talking to the news API.
///
/// The variants fall into two classes callers usually care about:
/// transport failures ([`is_transport`](Self::is_transport)), where no usable
/// response arrived, and decode failures ([`is_decode`](Self::is_decode)),
/// where a body arrived but was not the expected JSON envelope.
///
/// An API-level failure (`"status": "error"` in a well-formed body) is *not*
/// an error here. It comes back as an ordinary response value; use the
/// responses' `into_result` helpers to opt in to [`NewsApiError::Api`].
#[derive(Error, Debug)]
pub enum NewsApiError {
    /// Base URL plus resource path did not form a valid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not be sent or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not the JSON envelope expected for `endpoint`.
    #[error("failed to decode {endpoint} response (HTTP {status}): {source}")]
    Decode {
        /// Endpoint whose response failed to decode.
        endpoint: Endpoint,
        /// HTTP status the server answered with.
        status: StatusCode,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// `articles` was called with an empty source identifier.
    #[error("article source identifier must not be empty")]
    EmptySource,

    /// The API reported a failure inside a well-formed body.
    #[error("news API error {code}: {message}")]
    Api {
        /// Machine readable code, e.g. `apiKeyInvalid`.
        code: String,
        /// Human readable explanation.
        message: String,
    },

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NewsApiError {
    /// True when no response was obtained (bad URL, DNS, refused, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::InvalidUrl(_) | Self::Transport(_))
    }

    /// True when a response arrived but its body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Result type alias using [`NewsApiError`].
pub type Result<T> = std::result::Result<T, NewsApiError>;
