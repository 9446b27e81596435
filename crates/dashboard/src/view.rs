//! Plain-text rendering of dashboard state.

use std::fmt;

use stockroom_inventory::{Draft, InventoryItem, InventorySummary, LOW_STOCK_THRESHOLD};

/// Shown in place of an empty description or location.
pub const PLACEHOLDER: &str = "--";

pub fn display_or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow<'a> {
    item: &'a InventoryItem,
}

impl<'a> ItemRow<'a> {
    pub fn new(item: &'a InventoryItem) -> Self {
        Self { item }
    }

    pub fn is_low_stock(&self) -> bool {
        self.item.quantity <= LOW_STOCK_THRESHOLD
    }
}

impl fmt::Display for ItemRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_low_stock() { "!" } else { " " };
        write!(
            f,
            "{marker} {:>5}  {:<24} {:>6}  {:<16} {}",
            self.item.id,
            self.item.name,
            self.item.quantity,
            display_or_placeholder(&self.item.location),
            display_or_placeholder(&self.item.description),
        )
    }
}

pub fn render_table(items: &[&InventoryItem]) -> String {
    let mut out = format!(
        "  {:>5}  {:<24} {:>6}  {:<16} {}\n",
        "ID", "Name", "Qty", "Location", "Description"
    );
    for item in items {
        out.push_str(&ItemRow::new(item).to_string());
        out.push('\n');
    }
    out
}

pub fn render_summary(summary: &InventorySummary, last_synced: Option<&str>) -> String {
    let mut out = format!(
        "Items: {}  Total quantity: {}  Locations: {}  Low stock: {}  Out of stock: {}",
        summary.item_count,
        summary.total_quantity,
        summary.location_count,
        summary.low_stock_count,
        summary.out_of_stock_count,
    );
    if let Some(label) = last_synced {
        out.push_str(&format!("  Last synced: {label}"));
    }
    out
}

/// Heading for the form: "Add Item" or "Update Item #id".
pub fn draft_heading(draft: &Draft) -> String {
    match draft.id {
        Some(id) => format!("{} #{}", draft.mode().title(), id),
        None => draft.mode().title().to_string(),
    }
}
