//! Error types for remote webhook operations.

use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the webhooks API.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connect, TLS, timeout), or a response
    /// status outside the 2xx range.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The list call did not return a usable definition set.
    #[error("failed to list webhooks: service returned status code {status}")]
    ListFailed {
        /// Status code of the failed list call.
        status: u16,
    },

    /// Response body could not be decoded.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// Create call did not return 201 Created.
    #[error("webhook {name} not created, service returned status code {status}")]
    NotCreated {
        /// Declaration name.
        name: String,
        /// Status code received.
        status: u16,
    },

    /// Update call did not return 200 OK.
    #[error("webhook {name} not updated, service returned status code {status}")]
    NotUpdated {
        /// Declaration name.
        name: String,
        /// Status code received.
        status: u16,
    },

    /// Delete call did not return 204 No Content.
    #[error("webhook {id} not deleted, service returned status code {status}")]
    NotDeleted {
        /// Definition id.
        id: String,
        /// Status code received.
        status: u16,
    },
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => Self::Http(format!("HTTP {code}")),
            other => Self::Http(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}
