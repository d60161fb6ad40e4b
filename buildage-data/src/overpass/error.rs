//! Error types produced while querying an Overpass endpoint.

use thiserror::Error;

/// Errors from [`crate::overpass::ElementSource::fetch_elements`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success HTTP status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Endpoint URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description reported by the client.
        message: String,
    },
    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The request failed before a response arrived.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Endpoint URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The response body was not a valid Overpass JSON document.
    #[error("failed to decode response from {url}: {message}")]
    Decode {
        /// Endpoint URL.
        url: String,
        /// Decoder error description.
        message: String,
    },
}

impl FetchError {
    /// HTTP status code carried by the error, if the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Timeout { .. } | Self::Network { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Error type for [`crate::overpass::HttpOverpassSource`] construction failures.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
