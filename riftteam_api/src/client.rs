//! HTTP client for the RiftTeam backend API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::{
    path::build_path,
    query::{PlayerQuery, Query, ScrimQuery, TeamQuery},
    types::{
        NameAvailability, PlayerCreateRequest, PlayerListResponse, PlayerResponse,
        PlayerUpdateRequest, RiotCheckResponse, ScrimListResponse, TeamCreateRequest,
        TeamListResponse, TeamResponse, TeamUpdateRequest, TokenInfo,
    },
    Error,
};

/// Base URL used by [`Client::new`]: the backend's API root on a local dev server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Everything about a single call besides its path.
///
/// The body is sent as-is; use [`RequestOptions::with_json_body`] to serialize
/// a value. Headers are merged over `Content-Type: application/json`.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    /// HTTP method. Defaults to `GET`.
    pub method: Method,
    /// Request body, already JSON-encoded.
    pub body: Option<String>,
    /// Extra headers, overriding the defaults on conflict.
    pub headers: HeaderMap,
    /// Query-string pairs, URL-encoded and appended in order.
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `body` to JSON and uses it as the request body.
    pub fn with_json_body<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, Error> {
        let encoded = serde_json::to_string(body).map_err(Error::Encode)?;
        Ok(self.with_body(encoded))
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_query_pair(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    fn with_token(self, token: &str) -> Self {
        self.with_query_pair("token", token)
    }
}

/// HTTP client for the RiftTeam backend API.
///
/// Every call issues exactly one request: there is no retry, timeout,
/// caching or deduplication. The underlying `reqwest::Client` only pools
/// connections.
#[derive(Clone, Debug)]
pub struct Client {
    /// API root, without trailing slash. Paths are appended verbatim.
    base_api_url: String,
    http: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for deployments and for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Creates a client that sends through a caller-configured `reqwest::Client`.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: &[(String, String)]) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed for {}: {}", path, e);
            Error::InvalidUrl(e)
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Sends one request to `path` (relative to the base URL) and decodes the answer.
    ///
    /// - non-2xx: [`Error::Api`] with the status and the body's `detail`, or the
    ///   status reason phrase when the body has none;
    /// - 204: the body is ignored and `T` is decoded from JSON `null`, so `()`
    ///   and `Option<_>` callers get the absent value;
    /// - other 2xx: the body is decoded into `T`, mismatches are [`Error::Decode`].
    ///
    /// Transport failures are returned as [`Error::Transport`].
    pub async fn request<T>(&self, path: &str, options: RequestOptions) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path, &options.query)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        let method = options.method;
        tracing::debug!("{} {}", method, path);

        let mut builder = self.http.request(method.clone(), url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }
        let resp = builder.send().await.map_err(|e| {
            tracing::error!("{} {} failed to send: {}", method, path, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            tracing::error!(
                "{} {} failed with status {}: {}",
                method,
                path,
                status.as_u16(),
                message
            );
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return T::deserialize(Value::Null).map_err(|e| {
                tracing::error!("{} {} returned no content where a body was expected", method, path);
                Error::Decode {
                    source: e,
                    body: String::new(),
                }
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode {
                source: e,
                body: snippet,
            }
        })
    }

    /// Verifies that a Riot ID exists and returns basic account info.
    pub async fn check_riot_id(&self, name: &str, tag: &str) -> Result<RiotCheckResponse, Error> {
        let path = build_path("/riot/check", &[name, tag])?;
        self.request(&path, RequestOptions::default()).await
    }

    /// Creates a player profile using a one-time `create` token.
    pub async fn create_player(
        &self,
        data: &PlayerCreateRequest,
        token: &str,
    ) -> Result<PlayerResponse, Error> {
        let options = RequestOptions::new(Method::POST)
            .with_json_body(data)?
            .with_token(token);
        self.request("/players", options).await
    }

    /// Fetches a single player profile by slug, optionally with an edit token.
    pub async fn get_player(&self, slug: &str, token: Option<&str>) -> Result<PlayerResponse, Error> {
        let path = build_path("/players", &[slug])?;
        let mut options = RequestOptions::default();
        if let Some(token) = token {
            options = options.with_token(token);
        }
        self.request(&path, options).await
    }

    /// Lists players matching the given filters.
    pub async fn list_players(&self, query: &PlayerQuery) -> Result<PlayerListResponse, Error> {
        let options = RequestOptions::default().with_query(query.query_pairs());
        self.request("/players", options).await
    }

    /// Updates declarative fields on a player profile (requires an edit token).
    pub async fn update_player(
        &self,
        slug: &str,
        data: &PlayerUpdateRequest,
        token: &str,
    ) -> Result<PlayerResponse, Error> {
        let path = build_path("/players", &[slug])?;
        let options = RequestOptions::new(Method::PATCH)
            .with_json_body(data)?
            .with_token(token);
        self.request(&path, options).await
    }

    /// Deletes a player profile permanently (requires an edit token).
    pub async fn delete_player(&self, slug: &str, token: &str) -> Result<(), Error> {
        let path = build_path("/players", &[slug])?;
        self.request(&path, RequestOptions::new(Method::DELETE).with_token(token))
            .await
    }

    /// URL of a player's data export download. No request is made.
    pub fn export_player_url(&self, slug: &str, token: &str) -> Result<Url, Error> {
        let path = format!("{}/export", build_path("/players", &[slug])?);
        self.get_url(&path, &[("token".to_string(), token.to_string())])
    }

    /// Triggers a Riot data refresh for a player. The backend enforces a cooldown (429).
    pub async fn refresh_player(&self, slug: &str) -> Result<PlayerResponse, Error> {
        let path = format!("{}/refresh", build_path("/players", &[slug])?);
        self.request(&path, RequestOptions::new(Method::POST)).await
    }

    /// Validates an action token and returns its metadata. Unknown or expired tokens are 404.
    pub async fn validate_token(&self, token: &str) -> Result<TokenInfo, Error> {
        let path = format!("{}/validate", build_path("/tokens", &[token])?);
        self.request(&path, RequestOptions::default()).await
    }

    /// Creates a team using a one-time `team_create` token.
    pub async fn create_team(
        &self,
        data: &TeamCreateRequest,
        token: &str,
    ) -> Result<TeamResponse, Error> {
        let options = RequestOptions::new(Method::POST)
            .with_json_body(data)?
            .with_token(token);
        self.request("/teams", options).await
    }

    /// Fetches a single team by slug, optionally with an edit token.
    pub async fn get_team(&self, slug: &str, token: Option<&str>) -> Result<TeamResponse, Error> {
        let path = build_path("/teams", &[slug])?;
        let mut options = RequestOptions::default();
        if let Some(token) = token {
            options = options.with_token(token);
        }
        self.request(&path, options).await
    }

    /// Updates team fields (requires an edit token).
    pub async fn update_team(
        &self,
        slug: &str,
        data: &TeamUpdateRequest,
        token: &str,
    ) -> Result<TeamResponse, Error> {
        let path = build_path("/teams", &[slug])?;
        let options = RequestOptions::new(Method::PATCH)
            .with_json_body(data)?
            .with_token(token);
        self.request(&path, options).await
    }

    /// URL of a team's data export download. No request is made.
    pub fn export_team_url(&self, slug: &str, token: &str) -> Result<Url, Error> {
        let path = format!("{}/export", build_path("/teams", &[slug])?);
        self.get_url(&path, &[("token".to_string(), token.to_string())])
    }

    /// Deletes a team permanently (requires an edit token).
    pub async fn delete_team(&self, slug: &str, token: &str) -> Result<(), Error> {
        let path = build_path("/teams", &[slug])?;
        self.request(&path, RequestOptions::new(Method::DELETE).with_token(token))
            .await
    }

    /// Lists teams matching the given filters.
    pub async fn list_teams(&self, query: &TeamQuery) -> Result<TeamListResponse, Error> {
        let options = RequestOptions::default().with_query(query.query_pairs());
        self.request("/teams", options).await
    }

    /// Checks whether a team name is free. `exclude_slug` ignores the team being renamed.
    pub async fn check_team_name(
        &self,
        name: &str,
        exclude_slug: Option<&str>,
    ) -> Result<NameAvailability, Error> {
        let path = build_path("/teams/check-name", &[name])?;
        let mut options = RequestOptions::default();
        if let Some(exclude_slug) = exclude_slug {
            options = options.with_query_pair("exclude_slug", exclude_slug);
        }
        self.request(&path, options).await
    }

    /// Lists upcoming scrims matching the given filters.
    pub async fn list_scrims(&self, query: &ScrimQuery) -> Result<ScrimListResponse, Error> {
        let options = RequestOptions::default().with_query(query.query_pairs());
        self.request("/scrims", options).await
    }
}

/// Entry of a validation-error `detail` array.
#[derive(Deserialize)]
struct ValidationIssue {
    msg: String,
}

/// Message for a failed response: the body's `detail`, else the reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());
    match detail {
        None | Some(Value::Null) => reason_phrase(status),
        Some(Value::String(detail)) => detail,
        Some(Value::Array(items)) => {
            let issues: Result<Vec<ValidationIssue>, _> =
                serde_json::from_value(Value::Array(items.clone()));
            match issues {
                Ok(issues) if !issues.is_empty() => issues
                    .into_iter()
                    .map(|issue| issue.msg)
                    .collect::<Vec<_>>()
                    .join("; "),
                _ => Value::Array(items).to_string(),
            }
        }
        Some(other) => other.to_string(),
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
