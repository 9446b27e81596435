//! View-only aggregates over the mirrored collection.
//!
//! Everything here is a pure function of the item slice. Nothing is cached:
//! callers recompute after every change to the collection.

use std::cmp::Ordering;
use std::collections::HashSet;

use feruca::Collator;

use crate::item::InventoryItem;

/// Items at or below this quantity count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 3;

/// Compare two item names with the Unicode Collation Algorithm (CLDR root
/// locale).
///
/// Accents and case are secondary differences: "Écran" sorts between
/// "apple" and "Zebra", and "laptop" precedes "Laptop".
pub fn compare_names(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

/// The collection ordered by name, ascending. Equal names keep their
/// original relative order.
pub fn sorted_view(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    let mut collator = Collator::default();
    let mut sorted: Vec<&InventoryItem> = items.iter().collect();
    sorted.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
    sorted
}

pub fn total_quantity(items: &[InventoryItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Number of distinct non-blank locations (compared after trimming).
pub fn location_count(items: &[InventoryItem]) -> usize {
    items
        .iter()
        .map(|item| item.location.trim())
        .filter(|location| !location.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Items with quantity at or below [`LOW_STOCK_THRESHOLD`], in collection order.
pub fn low_stock(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items
        .iter()
        .filter(|item| item.quantity <= LOW_STOCK_THRESHOLD)
        .collect()
}

pub fn out_of_stock_count(items: &[InventoryItem]) -> usize {
    items.iter().filter(|item| item.quantity == 0).count()
}

/// Sorted items whose name or location contains `query`, ignoring case.
///
/// A blank query matches everything.
pub fn search<'a>(items: &'a [InventoryItem], query: &str) -> Vec<&'a InventoryItem> {
    let needle = query.trim().to_lowercase();
    sorted_view(items)
        .into_iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.location.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Snapshot of the numeric aggregates shown in the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub location_count: usize,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

impl InventorySummary {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        Self {
            item_count: items.len(),
            total_quantity: total_quantity(items),
            location_count: location_count(items),
            low_stock_count: low_stock(items).len(),
            out_of_stock_count: out_of_stock_count(items),
        }
    }
}
