//! CDN URLs for profile icons, champion portraits, rank crests and role icons.
//!
//! Data Dragon paths embed a game patch version. [`AssetUrls`] carries that
//! version explicitly; [`AssetUrls::resolve`] looks up the current patch once
//! and keeps [`DEFAULT_DDRAGON_VERSION`] if the lookup fails.

use riftteam_api::types::{Role, Tier};
use thiserror::Error;

pub const DEFAULT_DDRAGON_VERSION: &str = "15.3.1";
pub const DDRAGON_BASE_URL: &str = "https://ddragon.leagueoflegends.com";

const RANK_CREST_BASE: &str = "https://raw.communitydragon.org/latest/plugins/rcp-fe-lol-static-assets/global/default/images/ranked-mini-crests";
const ROLE_ICON_BASE: &str = "https://raw.communitydragon.org/latest/plugins/rcp-fe-lol-clash/global/default/assets/images/position-selector/positions";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("versions endpoint returned HTTP {0}")]
    HttpStatus(u16),

    #[error("versions list is empty")]
    EmptyVersionList,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetUrls {
    version: String,
    ddragon_base: String,
}

impl Default for AssetUrls {
    fn default() -> Self {
        Self::new(DEFAULT_DDRAGON_VERSION)
    }
}

impl AssetUrls {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ddragon_base: DDRAGON_BASE_URL.to_string(),
        }
    }

    /// Point Data Dragon lookups at another host (mirrors, tests).
    pub fn with_ddragon_base(mut self, base: &str) -> Self {
        self.ddragon_base = base.trim_end_matches('/').to_string();
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Fetch the current patch from `ddragon_base`, falling back to the
    /// default version on any failure.
    pub async fn resolve(http: &reqwest::Client, ddragon_base: &str) -> Self {
        let version = match fetch_latest_version(http, ddragon_base).await {
            Ok(version) => {
                tracing::debug!(%version, "resolved Data Dragon version");
                version
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback = DEFAULT_DDRAGON_VERSION,
                    "could not resolve Data Dragon version"
                );
                DEFAULT_DDRAGON_VERSION.to_string()
            }
        };
        Self::new(version).with_ddragon_base(ddragon_base)
    }

    /// `None` when the player has no icon (absent or `0`).
    pub fn profile_icon_url(&self, icon_id: Option<i64>) -> Option<String> {
        match icon_id {
            None | Some(0) => None,
            Some(id) => Some(format!(
                "{}/cdn/{}/img/profileicon/{}.png",
                self.ddragon_base, self.version, id
            )),
        }
    }

    /// Champion portrait. Display names like `Kha'Zix` or `Lee Sin` map to
    /// the asset keys `KhaZix` and `LeeSin`.
    pub fn champion_icon_url(&self, name: &str) -> String {
        let key: String = name.chars().filter(|c| *c != ' ' && *c != '\'').collect();
        format!(
            "{}/cdn/{}/img/champion/{}.png",
            self.ddragon_base, self.version, key
        )
    }

    pub fn rank_icon_url(tier: Tier) -> String {
        format!("{}/{}.png", RANK_CREST_BASE, tier.as_str().to_lowercase())
    }

    pub fn role_icon_url(role: Role) -> String {
        format!(
            "{}/icon-position-{}.png",
            ROLE_ICON_BASE,
            role.as_str().to_lowercase()
        )
    }
}

/// First entry of Data Dragon's `/api/versions.json`, which lists patches
/// newest first.
pub async fn fetch_latest_version(
    http: &reqwest::Client,
    ddragon_base: &str,
) -> Result<String, AssetError> {
    let url = format!("{}/api/versions.json", ddragon_base.trim_end_matches('/'));
    let resp = http.get(&url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(AssetError::HttpStatus(status.as_u16()));
    }
    let versions: Vec<String> = resp.json().await?;
    versions
        .into_iter()
        .next()
        .ok_or(AssetError::EmptyVersionList)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_icon() {
        let assets = AssetUrls::default();
        assert_eq!(
            assets.profile_icon_url(Some(29)).as_deref(),
            Some("https://ddragon.leagueoflegends.com/cdn/15.3.1/img/profileicon/29.png")
        );
        assert_eq!(assets.profile_icon_url(Some(0)), None);
        assert_eq!(assets.profile_icon_url(None), None);
    }

    #[test]
    fn champion_names_are_normalized() {
        let assets = AssetUrls::new("14.24.1");
        assert_eq!(
            assets.champion_icon_url("Kha'Zix"),
            "https://ddragon.leagueoflegends.com/cdn/14.24.1/img/champion/KhaZix.png"
        );
        assert!(assets.champion_icon_url("Lee Sin").ends_with("/LeeSin.png"));
    }

    #[test]
    fn crest_and_role_icons() {
        assert!(AssetUrls::rank_icon_url(Tier::Grandmaster)
            .ends_with("/ranked-mini-crests/grandmaster.png"));
        assert!(AssetUrls::role_icon_url(Role::Utility).ends_with("/icon-position-utility.png"));
    }

    #[test]
    fn custom_base_drops_trailing_slash() {
        let assets = AssetUrls::new("1.0.0").with_ddragon_base("http://localhost:9000/");
        assert_eq!(
            assets.champion_icon_url("Ahri"),
            "http://localhost:9000/cdn/1.0.0/img/champion/Ahri.png"
        );
    }
}
