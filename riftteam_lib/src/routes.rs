//! Frontend page routes, used to print shareable links.

use percent_encoding::percent_decode_str;
use riftteam_api::encode_segment;
use riftteam_api::types::TokenAction;
use url::Url;

use crate::error::RiftTeamError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Create,
    Edit,
    Profile(String),
    Browse,
    Team(String),
    TeamCreate,
    TeamEdit,
    Privacy,
    Legal,
}

impl Route {
    /// Absolute path of the page, with the slug percent-encoded.
    pub fn path(&self) -> Result<String, RiftTeamError> {
        let path = match self {
            Route::Home => "/".to_string(),
            Route::Create => "/create".to_string(),
            Route::Edit => "/edit".to_string(),
            Route::Profile(slug) => format!("/p/{}", encode_segment(slug)?),
            Route::Browse => "/browse".to_string(),
            Route::Team(slug) => format!("/t/{}", encode_segment(slug)?),
            Route::TeamCreate => "/team/create".to_string(),
            Route::TeamEdit => "/team/edit".to_string(),
            Route::Privacy => "/privacy".to_string(),
            Route::Legal => "/legal".to_string(),
        };
        Ok(path)
    }

    /// Inverse of [`Route::path`]. Query string, fragment and a trailing
    /// slash are ignored.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        let route = match segments.as_slice() {
            [] => Route::Home,
            ["create"] => Route::Create,
            ["edit"] => Route::Edit,
            ["p", slug] => Route::Profile(decode_slug(slug)?),
            ["browse"] => Route::Browse,
            ["t", slug] => Route::Team(decode_slug(slug)?),
            ["team", "create"] => Route::TeamCreate,
            ["team", "edit"] => Route::TeamEdit,
            ["privacy"] => Route::Privacy,
            ["legal"] => Route::Legal,
            _ => return None,
        };
        if !path.starts_with('/') {
            return None;
        }
        Some(route)
    }

    /// Page where a token for `action` is redeemed.
    pub fn for_token_action(action: TokenAction) -> Route {
        match action {
            TokenAction::Create => Route::Create,
            TokenAction::Edit => Route::Edit,
            TokenAction::TeamCreate => Route::TeamCreate,
            TokenAction::TeamEdit => Route::TeamEdit,
        }
    }

    /// Pages that act on behalf of a token holder.
    pub fn takes_token(&self) -> bool {
        matches!(
            self,
            Route::Create | Route::Edit | Route::TeamCreate | Route::TeamEdit
        )
    }

    /// Link to this page on the frontend at `app_url`.
    /// Any path prefix on `app_url` is kept.
    pub fn url(&self, app_url: &str) -> Result<Url, RiftTeamError> {
        let full = format!("{}{}", app_url.trim_end_matches('/'), self.path()?);
        Url::parse(&full).map_err(|e| {
            RiftTeamError::InvalidInput(format!("invalid app URL '{}': {}", app_url, e))
        })
    }

    /// Link carrying `?token=` for the create and edit pages.
    pub fn with_token(&self, app_url: &str, token: &str) -> Result<Url, RiftTeamError> {
        if !self.takes_token() {
            return Err(RiftTeamError::InvalidInput(format!(
                "{} does not accept a token",
                self.path()?
            )));
        }
        let mut url = self.url(app_url)?;
        url.query_pairs_mut().append_pair("token", token);
        Ok(url)
    }
}

fn decode_slug(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}
