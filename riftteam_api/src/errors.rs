//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The backend answered with a non-2xx status. `message` is the `detail`
    /// field of the error body, or the status reason phrase when absent.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
    /// The request never produced an HTTP response (DNS, refused connection, aborted).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A 2xx body did not match the expected shape.
    #[error("Failed to parse response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A path segment that URL normalization would rewrite (`""`, `.`, `..`).
    #[error("Invalid path segment {0:?}")]
    InvalidPathSegment(String),
}

impl Error {
    /// HTTP status of an [`Error::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Backend-supplied message of an [`Error::Api`] failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Error::Api { status: 403, .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Api { status: 409, .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Api { status: 422, .. })
    }
}
