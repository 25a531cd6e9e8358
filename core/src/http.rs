//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `LookupClient` builds `HttpRequest`
//! values and parses `HttpResponse` values; a `Transport` supplied by the host
//! performs the actual round-trip. The users API is read-only, so every
//! request is a body-less `GET`.

use async_trait::async_trait;

use crate::error::TransportError;

/// An outbound `GET` request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`. Non-2xx
/// statuses are data here, not errors; status interpretation belongs to
/// `LookupClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes `HttpRequest`s on behalf of the core.
///
/// Implementations report only transport-level failures (connection refused,
/// DNS, TLS, body read) as `Err`. A 404 or 500 is a successful round-trip.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
