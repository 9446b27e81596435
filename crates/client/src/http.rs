//! `reqwest`-backed implementation of [`ItemApi`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryItem, InventoryItemInput, InventoryItemPatch};

use crate::api::ItemApi;
use crate::config::ClientConfig;
use crate::error::RequestError;

/// HTTP client for the inventory REST backend.
#[derive(Debug, Clone)]
pub struct HttpItemClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpItemClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing `reqwest` client (connection pool, proxy settings).
    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Decode a success body, or turn the status into a [`RequestError`].
async fn handle_response<T>(resp: reqwest::Response) -> Result<T, RequestError>
where
    T: DeserializeOwned,
{
    let status = resp.status();
    if !status.is_success() {
        return Err(RequestError::Status {
            status: status.as_u16(),
        });
    }
    Ok(resp.json::<T>().await?)
}

#[async_trait]
impl ItemApi for HttpItemClient {
    async fn list(&self) -> Result<Vec<InventoryItem>, RequestError> {
        let url = self.config.items_url();
        tracing::debug!(%url, "listing items");

        let resp = self.http.get(&url).send().await?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        handle_response(resp).await
    }

    async fn create(&self, input: &InventoryItemInput) -> Result<InventoryItem, RequestError> {
        let url = self.config.items_url();
        tracing::debug!(%url, name = %input.name, "creating item");

        let resp = self.http.post(&url).json(input).send().await?;
        handle_response(resp).await
    }

    async fn update(
        &self,
        id: ItemId,
        patch: &InventoryItemPatch,
    ) -> Result<InventoryItem, RequestError> {
        let url = self.config.item_url(id);
        tracing::debug!(%url, "updating item");

        let resp = self.http.patch(&url).json(patch).send().await?;
        handle_response(resp).await
    }

    async fn delete(&self, id: ItemId) -> Result<(), RequestError> {
        let url = self.config.item_url(id);
        tracing::debug!(%url, "deleting item");

        let resp = self.http.delete(&url).send().await?;
        let status = resp.status();
        if status.is_success() || status == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(RequestError::Delete {
                id,
                status: status.as_u16(),
            })
        }
    }
}
