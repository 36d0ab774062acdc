use chrono::NaiveDate;

use crate::types::{ScrimFormat, Tier};

use super::{common::QueryCommon, Query};

/// Filters for `GET /scrims`. Only upcoming, active scrims are ever listed.
#[derive(Default, Clone, Debug)]
pub struct ScrimQuery {
    pub common: QueryCommon,
    pub min_rank: Option<Tier>,
    pub max_rank: Option<Tier>,
    /// Day of the scrim, interpreted in Europe/Paris by the backend.
    pub scheduled_date: Option<NaiveDate>,
    pub format: Option<ScrimFormatFilter>,
    pub hour_min: Option<u8>,
    pub hour_max: Option<u8>,
}

/// Either a best-of format or a fixed game count (sent as `G<n>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrimFormatFilter {
    BestOf(ScrimFormat),
    Games(u8),
}
impl std::fmt::Display for ScrimFormatFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrimFormatFilter::BestOf(format) => write!(f, "{}", format),
            ScrimFormatFilter::Games(count) => write!(f, "G{}", count),
        }
    }
}

impl Query for ScrimQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(min_rank) = self.min_rank {
            pairs.push(("min_rank".to_string(), min_rank.to_string()));
        }
        if let Some(max_rank) = self.max_rank {
            pairs.push(("max_rank".to_string(), max_rank.to_string()));
        }
        if let Some(date) = self.scheduled_date {
            pairs.push((
                "scheduled_date".to_string(),
                date.format("%Y-%m-%d").to_string(),
            ));
        }
        if let Some(format) = self.format {
            pairs.push(("format".to_string(), format.to_string()));
        }
        if let Some(hour_min) = self.hour_min {
            pairs.push(("hour_min".to_string(), hour_min.to_string()));
        }
        if let Some(hour_max) = self.hour_max {
            pairs.push(("hour_max".to_string(), hour_max.to_string()));
        }
        self.common.push_pairs(&mut pairs);
        pairs
    }
}

impl ScrimQuery {
    pub fn with_min_rank(mut self, tier: Tier) -> Self {
        self.min_rank = Some(tier);
        self
    }

    pub fn with_max_rank(mut self, tier: Tier) -> Self {
        self.max_rank = Some(tier);
        self
    }

    pub fn with_scheduled_date(mut self, date: NaiveDate) -> Self {
        self.scheduled_date = Some(date);
        self
    }

    pub fn with_format(mut self, format: ScrimFormatFilter) -> Self {
        self.format = Some(format);
        self
    }

    /// Restricts to scrims starting between `hour_min` and `hour_max` (inclusive, Paris time).
    pub fn with_hours(mut self, hour_min: Option<u8>, hour_max: Option<u8>) -> Self {
        self.hour_min = hour_min;
        self.hour_max = hour_max;
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use url::Url;

    use super::ScrimFormatFilter;
    use crate::{
        query::{Query, ScrimQuery},
        types::{ScrimFormat, Tier},
    };

    #[test]
    fn test_scrim_query() {
        let url = Url::parse("https://example.com/api/scrims").unwrap();

        insta::assert_snapshot!(
            ScrimQuery::default()
                .with_min_rank(Tier::Silver)
                .with_scheduled_date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
                .with_format(ScrimFormatFilter::BestOf(ScrimFormat::Bo3))
                .with_hours(Some(18), Some(23))
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/api/scrims?min_rank=SILVER&scheduled_date=2025-03-14&format=BO3&hour_min=18&hour_max=23"
        );

        insta::assert_snapshot!(
            ScrimQuery::default()
                .with_format(ScrimFormatFilter::Games(4))
                .with_limit(10)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/api/scrims?format=G4&limit=10"
        );
    }
}
