//! Stateless HTTP request builder and response parser for the users API.
//!
//! # Design
//! `LookupClient` holds only the API base and the header set. Each remote
//! call is split into a `build_*` method that produces an `HttpRequest` and a
//! `parse_*` method that consumes an `HttpResponse`. The caller executes the
//! round-trip in between, keeping this module deterministic and free of I/O.

use url::Url;

use crate::error::{ClientError, LookupError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{AssociatedItem, Entity, Identifier};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com/users";
pub const DEFAULT_USER_AGENT: &str = "profile-finder";
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Synchronous, stateless client for the users API.
#[derive(Debug, Clone)]
pub struct LookupClient {
    base_url: Url,
    user_agent: String,
}

impl LookupClient {
    /// Create a client rooted at `base_url` (for GitHub,
    /// `https://api.github.com/users`). A trailing slash is ignored.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::NotABase(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// `GET <base>/<identifier>`
    pub fn build_fetch_entity(&self, identifier: &Identifier) -> HttpRequest {
        let url = self.endpoint(&[identifier.as_str()]);
        self.request(url)
    }

    /// `GET <base>/<identifier>/repos?sort=created`
    pub fn build_fetch_items(&self, identifier: &Identifier) -> HttpRequest {
        let mut url = self.endpoint(&[identifier.as_str(), "repos"]);
        url.query_pairs_mut().append_pair("sort", "created");
        self.request(url)
    }

    pub fn parse_fetch_entity(&self, response: HttpResponse) -> Result<Entity, LookupError> {
        match response.status {
            200 => serde_json::from_str(&response.body)
                .map_err(|e| LookupError::Transient(format!("malformed entity payload: {e}"))),
            404 => Err(LookupError::NotFound),
            status => Err(LookupError::Transient(format!("HTTP {status}"))),
        }
    }

    pub fn parse_fetch_items(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<AssociatedItem>, LookupError> {
        if response.status != 200 {
            return Err(LookupError::ItemsUnavailable(format!(
                "HTTP {}",
                response.status
            )));
        }
        serde_json::from_str(&response.body)
            .map_err(|e| LookupError::ItemsUnavailable(format!("malformed items payload: {e}")))
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, url: Url) -> HttpRequest {
        HttpRequest {
            url: url.into(),
            headers: vec![
                ("accept".to_string(), ACCEPT.to_string()),
                ("user-agent".to_string(), self.user_agent.clone()),
            ],
        }
    }
}
