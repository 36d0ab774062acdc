//! CLI subcommand implementations.

pub mod players;
pub mod riot;
pub mod scrims;
pub mod teams;
pub mod tokens;

use riftteam_lib::assets::DDRAGON_BASE_URL;
use riftteam_lib::{AssetUrls, Config};

use crate::output::OutputFormat;

/// Asset URLs for the pinned Data Dragon version, or the current one.
/// JSON output carries raw ids only, so no lookup is made for it.
pub async fn asset_urls(config: &Config, format: &OutputFormat) -> AssetUrls {
    match &config.ddragon_version {
        Some(version) => AssetUrls::new(version.clone()),
        None if *format == OutputFormat::Json => AssetUrls::default(),
        None => AssetUrls::resolve(&reqwest::Client::new(), DDRAGON_BASE_URL).await,
    }
}
