//! Player profile types returned by the `/players` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Activity, Ambiance, Division, Role, Tier};

/// Champion mastery and ranked stats for a single champion.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChampionResponse {
    pub champion_id: i64,
    pub champion_name: String,
    pub mastery_level: Option<i64>,
    pub mastery_points: Option<i64>,
    #[serde(default)]
    pub games_played: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    pub avg_kills: Option<f64>,
    pub avg_deaths: Option<f64>,
    pub avg_assists: Option<f64>,
}

/// Full player profile: Riot data, declarative fields and top champions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerResponse {
    pub id: String,
    /// URL-safe identifier, derived from the Riot ID.
    pub slug: String,
    pub riot_puuid: String,
    pub riot_game_name: String,
    pub riot_tag_line: String,
    pub region: String,

    pub rank_solo_tier: Option<Tier>,
    pub rank_solo_division: Option<Division>,
    pub rank_solo_lp: Option<i64>,
    pub rank_solo_wins: Option<i64>,
    pub rank_solo_losses: Option<i64>,
    pub rank_flex_tier: Option<Tier>,
    pub rank_flex_division: Option<Division>,
    pub rank_flex_lp: Option<i64>,
    pub rank_flex_wins: Option<i64>,
    pub rank_flex_losses: Option<i64>,
    /// Highest solo rank ever recorded. Older backends omit these fields.
    #[serde(default)]
    pub peak_solo_tier: Option<Tier>,
    #[serde(default)]
    pub peak_solo_division: Option<Division>,
    #[serde(default)]
    pub peak_solo_lp: Option<i64>,
    pub primary_role: Option<Role>,
    pub secondary_role: Option<Role>,
    pub summoner_level: Option<i64>,
    pub profile_icon_id: Option<i64>,

    pub discord_user_id: Option<String>,
    pub discord_username: Option<String>,
    pub description: Option<String>,
    pub activities: Option<Vec<Activity>>,
    pub ambiance: Option<Ambiance>,
    pub frequency_min: Option<i64>,
    pub frequency_max: Option<i64>,

    /// Looking for team.
    pub is_lft: bool,
    pub last_riot_sync: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub champions: Vec<ChampionResponse>,
}

impl PlayerResponse {
    /// Riot ID in `Name#TAG` form.
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.riot_game_name, self.riot_tag_line)
    }
}

/// Paginated list of player profiles.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerListResponse {
    pub players: Vec<PlayerResponse>,
    /// Number of players matching the filters, across all pages.
    pub total: i64,
}

/// Declarative fields sent when creating a player profile.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlayerCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambiance: Option<Ambiance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_lft: Option<bool>,
}

/// Partial update of a player profile. Only `Some` fields are sent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlayerUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambiance: Option<Ambiance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_lft: Option<bool>,
}

impl PlayerUpdateRequest {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
