use crate::types::{Role, Tier};

use super::{common::QueryCommon, Query};

/// Filters for `GET /teams`.
#[derive(Default, Clone, Debug)]
pub struct TeamQuery {
    pub common: QueryCommon,
    pub is_lfp: Option<bool>,
    pub role: Option<Role>,
    pub min_rank: Option<Tier>,
    pub max_rank: Option<Tier>,
}

impl Query for TeamQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(is_lfp) = self.is_lfp {
            pairs.push(("is_lfp".to_string(), is_lfp.to_string()));
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

impl TeamQuery {
    pub fn with_lfp(mut self, is_lfp: bool) -> Self {
        self.is_lfp = Some(is_lfp);
        self
    }

    /// Filters on teams recruiting for this role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Teams whose rank window reaches at least this tier.
    pub fn with_min_rank(mut self, tier: Tier) -> Self {
        self.min_rank = Some(tier);
        self
    }

    /// Teams whose rank window starts at or below this tier.
    pub fn with_max_rank(mut self, tier: Tier) -> Self {
        self.max_rank = Some(tier);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{
        query::{Query, TeamQuery},
        types::{Role, Tier},
    };

    #[test]
    fn test_team_query() {
        let url = Url::parse("https://example.com/api/teams").unwrap();

        insta::assert_snapshot!(
            TeamQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/api/teams"
        );

        insta::assert_snapshot!(
            TeamQuery::default()
                .with_lfp(true)
                .with_role(Role::Jungle)
                .with_min_rank(Tier::Platinum)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/api/teams?is_lfp=true&role=JUNGLE&min_rank=PLATINUM"
        );
    }
}
