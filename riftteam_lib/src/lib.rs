//! Library layer for RiftTeam: configuration, CDN asset URLs, display
//! formatting, frontend routes and input validation.
//!
//! Re-exports the `riftteam_api` client so callers only need this crate.

pub mod assets;
pub mod config;
pub mod error;
pub mod format;
pub mod labels;
pub mod routes;
pub mod validation;

pub use riftteam_api;
pub use riftteam_api::types;
pub use riftteam_api::{
    Client, PlayerQuery, Query, ScrimFormatFilter, ScrimQuery, TeamQuery, DEFAULT_BASE_URL,
};

pub use assets::{AssetError, AssetUrls};
pub use config::Config;
pub use error::RiftTeamError;
pub use routes::Route;
