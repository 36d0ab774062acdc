//! Runtime configuration read from the environment.

use riftteam_api::DEFAULT_BASE_URL;

pub const DEFAULT_APP_URL: &str = "http://localhost:5173";

pub const ENV_API_URL: &str = "RIFTTEAM_API_URL";
pub const ENV_APP_URL: &str = "RIFTTEAM_APP_URL";
pub const ENV_DDRAGON_VERSION: &str = "RIFTTEAM_DDRAGON_VERSION";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL, including the `/api` prefix.
    pub api_url: String,
    /// Public frontend URL used to build profile links.
    pub app_url: String,
    /// Pinned Data Dragon version. `None` means resolve it at runtime.
    pub ddragon_version: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            ddragon_version: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();
        Self {
            api_url: get(ENV_API_URL).unwrap_or(defaults.api_url),
            app_url: get(ENV_APP_URL)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.app_url),
            ddragon_version: get(ENV_DDRAGON_VERSION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:8000/api");
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            (ENV_API_URL, "https://riftteam.fr/api"),
            (ENV_APP_URL, "https://riftteam.fr/"),
            (ENV_DDRAGON_VERSION, "14.24.1"),
        ]));
        assert_eq!(config.api_url, "https://riftteam.fr/api");
        assert_eq!(config.app_url, "https://riftteam.fr");
        assert_eq!(config.ddragon_version.as_deref(), Some("14.24.1"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[(ENV_API_URL, "  "), (ENV_DDRAGON_VERSION, "")]));
        assert_eq!(config.api_url, DEFAULT_BASE_URL);
        assert_eq!(config.ddragon_version, None);
    }
}
