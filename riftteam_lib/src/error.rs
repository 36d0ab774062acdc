//! Error types for the library layer.

use std::fmt;

use crate::assets::AssetError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding asset lookup and input validation failures.
#[derive(Debug)]
pub enum RiftTeamError {
    /// An error from the underlying API client.
    Api(riftteam_api::Error),
    /// Fetching CDN metadata failed.
    Assets(AssetError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl RiftTeamError {
    /// HTTP status of a backend rejection, if this error is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for RiftTeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Assets(e) => write!(f, "Asset error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for RiftTeamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Assets(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<riftteam_api::Error> for RiftTeamError {
    fn from(e: riftteam_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<AssetError> for RiftTeamError {
    fn from(e: AssetError) -> Self {
        Self::Assets(e)
    }
}
