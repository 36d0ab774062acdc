use crate::types::{Role, Tier};

use super::{common::QueryCommon, Query};

/// Filters for `GET /players`.
#[derive(Default, Clone, Debug)]
pub struct PlayerQuery {
    pub common: QueryCommon,
    pub is_lft: Option<bool>,
    pub role: Option<Role>,
    pub min_rank: Option<Tier>,
    pub max_rank: Option<Tier>,
}

impl Query for PlayerQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(is_lft) = self.is_lft {
            pairs.push(("is_lft".to_string(), is_lft.to_string()));
        }
        if let Some(role) = self.role {
            pairs.push(("role".to_string(), role.to_string()));
        }
        if let Some(min_rank) = self.min_rank {
            pairs.push(("min_rank".to_string(), min_rank.to_string()));
        }
        if let Some(max_rank) = self.max_rank {
            pairs.push(("max_rank".to_string(), max_rank.to_string()));
        }
        self.common.push_pairs(&mut pairs);
        pairs
    }
}

impl PlayerQuery {
    pub fn with_lft(mut self, is_lft: bool) -> Self {
        self.is_lft = Some(is_lft);
        self
    }

    /// Filters on the player's primary role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Lowest solo tier to include.
    pub fn with_min_rank(mut self, tier: Tier) -> Self {
        self.min_rank = Some(tier);
        self
    }

    /// Highest solo tier to include.
    pub fn with_max_rank(mut self, tier: Tier) -> Self {
        self.max_rank = Some(tier);
        self
    }
}
