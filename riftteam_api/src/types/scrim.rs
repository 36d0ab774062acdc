//! Scrim listings returned by the `/scrims` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TeamResponse, Tier};

/// Series length of a scrim.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrimFormat {
    #[serde(rename = "BO1")]
    Bo1,
    #[serde(rename = "BO3")]
    Bo3,
    #[serde(rename = "BO5")]
    Bo5,
}
impl std::fmt::Display for ScrimFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ScrimFormat::Bo1 => "BO1",
                ScrimFormat::Bo3 => "BO3",
                ScrimFormat::Bo5 => "BO5",
            }
        )
    }
}
impl std::str::FromStr for ScrimFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BO1" => Ok(ScrimFormat::Bo1),
            "BO3" => Ok(ScrimFormat::Bo3),
            "BO5" => Ok(ScrimFormat::Bo5),
            _ => Err(()),
        }
    }
}

/// An open scrim request posted by a team captain.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScrimResponse {
    pub id: String,
    pub team_id: String,
    pub captain_discord_id: String,
    pub min_rank: Option<Tier>,
    pub max_rank: Option<Tier>,
    pub scheduled_at: DateTime<Utc>,
    pub format: Option<ScrimFormat>,
    /// Fixed number of games, for scrims not played as a best-of.
    pub game_count: Option<i64>,
    pub fearless: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub team: TeamResponse,
}

/// Paginated list of upcoming scrims.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScrimListResponse {
    pub scrims: Vec<ScrimResponse>,
    pub total: i64,
}
