//! Inventory model for the dashboard.
//!
//! This crate contains the wire-level item types, the edit/create draft and
//! the pure aggregates derived from a mirrored collection (no IO, no HTTP).

pub mod draft;
pub mod item;
pub mod summary;

pub use draft::{Draft, DraftMode};
pub use item::{InventoryItem, InventoryItemInput, InventoryItemPatch};
pub use summary::{InventorySummary, LOW_STOCK_THRESHOLD};
