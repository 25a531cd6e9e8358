//! The two remote calls behind a lookup, with failures normalized.
//!
//! `LookupService` pairs a `LookupClient` with a `Transport`. A transport
//! failure on the entity call is `Transient`; on the items call it is
//! `ItemsUnavailable`. No retries, and no timeout beyond whatever the
//! transport applies by default.

use tracing::debug;

use crate::client::LookupClient;
use crate::error::LookupError;
use crate::http::Transport;
use crate::types::{AssociatedItem, Entity, Identifier};

pub struct LookupService<T> {
    client: LookupClient,
    transport: T,
}

impl<T: Transport> LookupService<T> {
    pub fn new(client: LookupClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub async fn fetch_entity(&self, identifier: &Identifier) -> Result<Entity, LookupError> {
        let request = self.client.build_fetch_entity(identifier);
        debug!(url = %request.url, "fetching entity");
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| LookupError::Transient(e.to_string()))?;
        self.client.parse_fetch_entity(response)
    }

    pub async fn fetch_associated_items(
        &self,
        identifier: &Identifier,
    ) -> Result<Vec<AssociatedItem>, LookupError> {
        let request = self.client.build_fetch_items(identifier);
        debug!(url = %request.url, "fetching associated items");
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| LookupError::ItemsUnavailable(e.to_string()))?;
        self.client.parse_fetch_items(response)
    }
}
