use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

/// An inventory record as returned by the backend.
///
/// `created_at`/`updated_at` are backend-assigned and treated as opaque; the
/// client only displays them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
    #[serde(default)]
    pub location: String,
    pub created_at: String,
    pub updated_at: String,
}

impl InventoryItem {
    /// The mutable subset of this item.
    pub fn to_input(&self) -> InventoryItemInput {
        InventoryItemInput {
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
            location: self.location.clone(),
        }
    }
}

/// Body of a create request: every mutable field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItemInput {
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub location: String,
}

/// Body of an update request: any subset of the mutable fields.
///
/// Absent fields are left out of the JSON body so the backend keeps them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl InventoryItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.location.is_none()
    }
}

impl From<InventoryItemInput> for InventoryItemPatch {
    fn from(input: InventoryItemInput) -> Self {
        Self {
            name: Some(input.name),
            description: Some(input.description),
            quantity: Some(input.quantity),
            location: Some(input.location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_backend_payload() {
        let item: InventoryItem = serde_json::from_value(json!({
            "id": 1,
            "name": "Laptop",
            "description": "",
            "quantity": 5,
            "location": "HQ",
            "created_at": "2024-01-01T10:00:00Z",
            "updated_at": "2024-01-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(item.id, ItemId::new(1));
        assert_eq!(item.name, "Laptop");
        assert_eq!(item.quantity, 5);
        assert_eq!(item.to_input().location, "HQ");
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let result: Result<InventoryItem, _> = serde_json::from_value(json!({
            "id": 1,
            "name": "Laptop",
            "quantity": -1,
            "created_at": "t",
            "updated_at": "t"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn patch_omits_absent_fields() {
        let patch = InventoryItemPatch {
            quantity: Some(2),
            ..InventoryItemPatch::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "quantity": 2 }));
        assert!(!patch.is_empty());
        assert!(InventoryItemPatch::default().is_empty());
    }

    #[test]
    fn full_patch_carries_every_input_field() {
        let input = InventoryItemInput {
            name: "Mouse".to_string(),
            description: "Wireless".to_string(),
            quantity: 10,
            location: "Desk".to_string(),
        };
        let value = serde_json::to_value(InventoryItemPatch::from(input.clone())).unwrap();
        assert_eq!(value, serde_json::to_value(&input).unwrap());
    }
}
