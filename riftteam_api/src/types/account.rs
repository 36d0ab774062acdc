//! Riot account lookup and action-token metadata.

use serde::{Deserialize, Serialize};

/// Account info returned by the Riot ID check endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RiotCheckResponse {
    pub game_name: String,
    pub tag_line: String,
    pub puuid: String,
    pub summoner_level: Option<i64>,
    pub profile_icon_id: Option<i64>,
}

/// Mutation an action token authorizes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenAction {
    Create,
    Edit,
    TeamCreate,
    TeamEdit,
}
impl std::fmt::Display for TokenAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TokenAction::Create => "create",
                TokenAction::Edit => "edit",
                TokenAction::TeamCreate => "team_create",
                TokenAction::TeamEdit => "team_edit",
            }
        )
    }
}

/// Metadata returned when validating an action token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenInfo {
    pub action: TokenAction,
    pub discord_username: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
    /// Profile or team the token is bound to, for edit actions.
    pub slug: Option<String>,
    pub team_name: Option<String>,
}
