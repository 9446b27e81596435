use async_trait::async_trait;

use stockroom_core::ItemId;
use stockroom_inventory::{InventoryItem, InventoryItemInput, InventoryItemPatch};

use crate::error::RequestError;

/// The four remote operations on the item collection.
///
/// Implementations resolve each call with either the server's confirmed
/// result or a [`RequestError`]; they never touch local state.
#[async_trait]
pub trait ItemApi: Send + Sync {
    /// The full current collection. A "no content" answer is an empty list.
    async fn list(&self) -> Result<Vec<InventoryItem>, RequestError>;

    /// Create an item; returns it with the backend-assigned id and timestamps.
    async fn create(&self, input: &InventoryItemInput) -> Result<InventoryItem, RequestError>;

    /// Apply a partial update; returns the item as confirmed by the backend.
    async fn update(
        &self,
        id: ItemId,
        patch: &InventoryItemPatch,
    ) -> Result<InventoryItem, RequestError>;

    async fn delete(&self, id: ItemId) -> Result<(), RequestError>;
}
