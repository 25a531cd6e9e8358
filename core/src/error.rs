//! Error types for profile lookups.
//!
//! # Design
//! `NotFound` gets a dedicated variant because it is the one failure the user
//! can correct. Every other entity failure collapses into `Transient`, and any
//! failure of the secondary items call is `ItemsUnavailable`, which never
//! invalidates an already rendered card. The `String` payloads carry detail
//! for logs only; user-facing wording lives in the controller.

use thiserror::Error;

/// Failures surfaced by the lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The remote service answered 404 for the entity.
    #[error("profile not found")]
    NotFound,

    /// Network failure, unexpected status, or malformed entity payload.
    #[error("profile lookup failed: {0}")]
    Transient(String),

    /// The associated items listing could not be fetched or decoded.
    #[error("associated items unavailable: {0}")]
    ItemsUnavailable(String),
}

/// A request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A `LookupClient` could not be built from the configured base URL.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("base url cannot carry path segments: {0}")]
    NotABase(String),
}
