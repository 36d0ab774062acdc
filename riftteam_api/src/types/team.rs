//! Team types returned by the `/teams` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Activity, Ambiance, Division, Role, Tier};

/// Lightweight player info embedded in a roster entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerSummary {
    pub id: String,
    pub slug: String,
    pub riot_game_name: String,
    pub riot_tag_line: String,
    pub rank_solo_tier: Option<Tier>,
    pub rank_solo_division: Option<Division>,
    pub rank_solo_lp: Option<i64>,
    pub primary_role: Option<Role>,
    pub profile_icon_id: Option<i64>,
}

/// A roster member with the role they hold in the team.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamMemberResponse {
    pub player: PlayerSummary,
    pub role: Role,
}

/// Full team profile with recruitment settings and roster.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub captain_discord_id: String,
    pub captain_discord_name: Option<String>,
    pub description: Option<String>,
    pub activities: Option<Vec<Activity>>,
    pub ambiance: Option<Ambiance>,
    pub frequency_min: Option<i64>,
    pub frequency_max: Option<i64>,
    pub wanted_roles: Option<Vec<Role>>,
    pub min_rank: Option<Tier>,
    pub max_rank: Option<Tier>,
    /// Looking for players.
    pub is_lfp: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub members: Vec<TeamMemberResponse>,
}

impl TeamResponse {
    /// Roles the team is recruiting for that no current member fills.
    pub fn open_roles(&self) -> Vec<Role> {
        self.wanted_roles
            .iter()
            .flatten()
            .filter(|role| !self.members.iter().any(|m| m.role == **role))
            .copied()
            .collect()
    }
}

/// Paginated list of teams.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamListResponse {
    pub teams: Vec<TeamResponse>,
    pub total: i64,
}

/// Fields sent when creating a team. The name comes from the action token.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TeamCreateRequest {
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
    pub wanted_roles: Option<Vec<Role>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rank: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rank: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_lfp: Option<bool>,
}

/// Partial update of a team. Only `Some` fields are sent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TeamUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
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
    pub wanted_roles: Option<Vec<Role>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rank: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rank: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_lfp: Option<bool>,
}

impl TeamUpdateRequest {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of `/teams/check-name/{name}`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NameAvailability {
    pub available: bool,
}
