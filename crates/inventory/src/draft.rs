//! The single create/edit form held by the dashboard.

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::item::{InventoryItem, InventoryItemInput};

/// Which operation submitting the draft will perform.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit(ItemId),
}

impl DraftMode {
    pub fn title(&self) -> &'static str {
        match self {
            DraftMode::Create => "Add Item",
            DraftMode::Edit(_) => "Update Item",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            DraftMode::Create => "Add",
            DraftMode::Edit(_) => "Update",
        }
    }

    /// Only an edit can be cancelled; a create draft is simply cleared.
    pub fn can_cancel(&self) -> bool {
        matches!(self, DraftMode::Edit(_))
    }
}

/// Not-yet-confirmed form state.
///
/// Presence of `id` selects edit mode. A draft never carries timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub id: Option<ItemId>,
    pub fields: InventoryItemInput,
}

impl Draft {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing item, in edit mode.
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            id: Some(item.id),
            fields: item.to_input(),
        }
    }

    pub fn mode(&self) -> DraftMode {
        match self.id {
            Some(id) => DraftMode::Edit(id),
            None => DraftMode::Create,
        }
    }

    pub fn is_editing(&self, id: ItemId) -> bool {
        self.id == Some(id)
    }

    /// Check the draft can be submitted and hand back the fields to send.
    pub fn validate(&self) -> DomainResult<InventoryItemInput> {
        if self.fields.name.trim().is_empty() {
            return Err(DomainError::validation("Name is required"));
        }
        Ok(self.fields.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> InventoryItem {
        InventoryItem {
            id: ItemId::new(1),
            name: "Laptop".to_string(),
            description: "Ultrabook".to_string(),
            quantity: 5,
            location: "HQ".to_string(),
            created_at: "2024-01-01T10:00:00Z".to_string(),
            updated_at: "2024-01-02T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn empty_draft_is_in_create_mode() {
        let draft = Draft::empty();
        assert_eq!(draft.mode(), DraftMode::Create);
        assert_eq!(draft.mode().title(), "Add Item");
        assert_eq!(draft.mode().submit_label(), "Add");
        assert!(!draft.mode().can_cancel());
        assert_eq!(draft.fields.quantity, 0);
        assert_eq!(draft.fields, InventoryItemInput::default());
    }

    #[test]
    fn draft_from_item_copies_mutable_fields_and_id() {
        let draft = Draft::from_item(&laptop());
        assert_eq!(draft.mode(), DraftMode::Edit(ItemId::new(1)));
        assert_eq!(draft.mode().title(), "Update Item");
        assert_eq!(draft.mode().submit_label(), "Update");
        assert!(draft.mode().can_cancel());
        assert_eq!(draft.fields.name, "Laptop");
        assert_eq!(draft.fields.description, "Ultrabook");
        assert_eq!(draft.fields.quantity, 5);
        assert_eq!(draft.fields.location, "HQ");
        assert!(draft.is_editing(ItemId::new(1)));
        assert!(!draft.is_editing(ItemId::new(2)));
    }

    #[test]
    fn whitespace_name_fails_validation() {
        for name in ["", "   ", "\t\n"] {
            let mut draft = Draft::empty();
            draft.fields.name = name.to_string();
            let err = draft.validate().unwrap_err();
            assert_eq!(err.to_string(), "Name is required");
        }
    }

    #[test]
    fn named_draft_validates_to_its_fields() {
        let mut draft = Draft::empty();
        draft.fields.name = " Laptop ".to_string();
        draft.fields.quantity = 3;
        let input = draft.validate().unwrap();
        // The name is sent as typed; only the emptiness check trims.
        assert_eq!(input.name, " Laptop ");
        assert_eq!(input.quantity, 3);
    }
}
