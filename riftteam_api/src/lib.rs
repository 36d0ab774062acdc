//! Typed client for the RiftTeam backend API.
//!
//! [`Client::request`] is the single transport primitive: JSON in, JSON out,
//! non-2xx answers turned into [`Error::Api`]. The endpoint methods on
//! [`Client`] build on it.

mod client;
mod errors;
mod path;
mod query;
pub mod types;
pub use self::client::{Client, RequestOptions, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::path::encode_segment;
pub use self::query::{PlayerQuery, Query, QueryCommon, ScrimFormatFilter, ScrimQuery, TeamQuery};
pub use reqwest::Method;
