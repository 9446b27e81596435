//! The dashboard state controller.
//!
//! `Dashboard` mirrors the backend's item collection and holds the single
//! create/edit draft. Remote calls are awaited to completion before any local
//! patch is applied; nothing is changed speculatively, so a failed call never
//! needs a rollback.

use chrono::{DateTime, Local, Utc};

use stockroom_client::ItemApi;
use stockroom_core::ItemId;
use stockroom_inventory::summary::{self, InventorySummary};
use stockroom_inventory::{Draft, DraftMode, InventoryItem, InventoryItemPatch};

use crate::error::DashboardError;

pub struct Dashboard<A> {
    api: A,
    items: Vec<InventoryItem>,
    draft: Draft,
    loading: bool,
    error: Option<String>,
    last_synced: Option<DateTime<Utc>>,
}

impl<A: ItemApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
            draft: Draft::empty(),
            loading: false,
            error: None,
            last_synced: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Replace the mirrored collection with the backend's current one.
    ///
    /// The loading flag is raised for the duration of the call and cleared
    /// whatever the outcome.
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        self.loading = true;
        self.error = None;

        let result = self.api.list().await;
        self.loading = false;

        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "loaded items");
                self.items = items;
                self.mark_synced();
                Ok(())
            }
            Err(err) => Err(self.fail(DashboardError::Fetch(err))),
        }
    }

    /// Send the draft to the backend: an update in edit mode, a create
    /// otherwise.
    ///
    /// A blank name is rejected locally without contacting the backend. On
    /// failure the draft and the collection are left as they were.
    pub async fn submit(&mut self) -> Result<(), DashboardError> {
        self.error = None;

        let fields = match self.draft.validate() {
            Ok(fields) => fields,
            Err(err) => return Err(self.fail(err.into())),
        };

        match self.draft.mode() {
            DraftMode::Edit(id) => {
                let patch = InventoryItemPatch::from(fields);
                match self.api.update(id, &patch).await {
                    Ok(updated) => {
                        tracing::info!(id = %updated.id, "updated item");
                        self.replace_item(updated);
                    }
                    Err(err) => return Err(self.fail(DashboardError::Save(err))),
                }
            }
            DraftMode::Create => match self.api.create(&fields).await {
                Ok(created) => {
                    tracing::info!(id = %created.id, "created item");
                    self.insert_item(created);
                }
                Err(err) => return Err(self.fail(DashboardError::Save(err))),
            },
        }

        self.draft = Draft::empty();
        self.mark_synced();
        Ok(())
    }

    /// Load the item with `id` into the draft, discarding any unsaved draft.
    ///
    /// Returns `false` when no such item is mirrored; the draft is then left
    /// alone.
    pub fn edit(&mut self, id: ItemId) -> bool {
        match self.items.iter().find(|item| item.id == id) {
            Some(item) => {
                self.draft = Draft::from_item(item);
                true
            }
            None => false,
        }
    }

    /// Discard the draft without contacting the backend.
    pub fn cancel_edit(&mut self) {
        self.draft = Draft::empty();
    }

    /// Delete an item on the backend, then drop it from the mirror.
    ///
    /// A draft editing the deleted item is reset.
    pub async fn delete(&mut self, id: ItemId) -> Result<(), DashboardError> {
        self.error = None;

        if let Err(err) = self.api.delete(id).await {
            return Err(self.fail(DashboardError::Delete { id, error: err }));
        }

        tracing::info!(%id, "deleted item");
        self.items.retain(|item| item.id != id);
        if self.draft.is_editing(id) {
            self.draft = Draft::empty();
        }
        self.mark_synced();
        Ok(())
    }

    fn fail(&mut self, err: DashboardError) -> DashboardError {
        tracing::warn!(error = %err, "dashboard operation failed");
        self.error = Some(err.to_string());
        err
    }
}

impl<A> Dashboard<A> {
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last failure message, replaced by each new failure and cleared
    /// when the next operation starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_synced(&self) -> Option<DateTime<Utc>> {
        self.last_synced
    }

    /// Local `HH:MM` of the last successful sync.
    pub fn last_synced_label(&self) -> Option<String> {
        self.last_synced
            .map(|at| at.with_timezone(&Local).format("%H:%M").to_string())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.fields.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.fields.description = description.into();
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.draft.fields.quantity = quantity;
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.draft.fields.location = location.into();
    }

    pub fn sorted_items(&self) -> Vec<&InventoryItem> {
        summary::sorted_view(&self.items)
    }

    pub fn search(&self, query: &str) -> Vec<&InventoryItem> {
        summary::search(&self.items, query)
    }

    pub fn total_quantity(&self) -> u64 {
        summary::total_quantity(&self.items)
    }

    pub fn location_count(&self) -> usize {
        summary::location_count(&self.items)
    }

    pub fn low_stock(&self) -> Vec<&InventoryItem> {
        summary::low_stock(&self.items)
    }

    pub fn out_of_stock_count(&self) -> usize {
        summary::out_of_stock_count(&self.items)
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_items(&self.items)
    }

    /// Nothing to show once loading has finished.
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.items.is_empty()
    }

    fn mark_synced(&mut self) {
        self.last_synced = Some(Utc::now());
    }

    /// Swap in the backend's representation of an existing item.
    fn replace_item(&mut self, updated: InventoryItem) {
        match self.items.iter_mut().find(|item| item.id == updated.id) {
            Some(slot) => *slot = updated,
            None => tracing::warn!(id = %updated.id, "updated item is no longer mirrored"),
        }
    }

    /// Append a created item; an id already mirrored is replaced in place so
    /// ids stay unique.
    fn insert_item(&mut self, created: InventoryItem) {
        match self.items.iter_mut().find(|item| item.id == created.id) {
            Some(slot) => *slot = created,
            None => self.items.push(created),
        }
    }
}
