//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] pagination fields.

use url::Url;

/// Trait implemented by all list-endpoint query builders. Produces flat
/// string pairs and provides shared builder methods for pagination.
pub trait Query {
    /// Returns this query's parameters as flat key/value pairs, in send order.
    fn query_pairs(&self) -> Vec<(String, String)>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    /// Sets the maximum number of results (the backend caps it at 100).
    fn with_limit(mut self, limit: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }

    /// Skips the first `offset` results.
    fn with_offset(mut self, offset: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().offset = Some(offset);
        self
    }
}

/// Pagination fields shared by all list queries. `None` uses the backend default
/// (20 results from offset 0).
#[derive(Clone, Copy, Default, Debug)]
pub struct QueryCommon {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl QueryCommon {
    /// Appends the pagination pairs, if set.
    pub fn push_pairs(&self, pairs: &mut Vec<(String, String)>) {
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
    }
}
