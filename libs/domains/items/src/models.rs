use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_not_blank;

/// Item entity as held by the store and returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier, starting at 1
    pub id: i64,
    /// Item name
    pub name: String,
    /// Item description
    pub description: String,
    /// Unit price, always positive
    pub price: f64,
    /// Set once when the item is accepted
    pub created_at: DateTime<Utc>,
}

/// Request body for both add and update.
///
/// Every field is optional on the wire so that a missing field is reported
/// as a validation message rather than a parse failure. Unknown fields,
/// including client-supplied `id` and `createdAt`, are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemPayload {
    #[validate(
        required(message = "Item name is required"),
        custom(function = "validate_not_blank", message = "Item name is required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Item description is required"),
        custom(
            function = "validate_not_blank",
            message = "Item description is required"
        )
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "Item price is required"),
        range(exclusive_min = 0.0, message = "Price must be positive")
    )]
    pub price: Option<f64>,
}

impl ItemPayload {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price),
        }
    }
}

/// The user-editable part of an item, after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// An accepted item waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub fields: ItemFields,
    pub created_at: DateTime<Utc>,
}

impl NewItem {
    pub fn new(fields: ItemFields, created_at: DateTime<Utc>) -> Self {
        Self { fields, created_at }
    }

    /// Attach the store-assigned id.
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.fields.name,
            description: self.fields.description,
            price: self.fields.price,
            created_at: self.created_at,
        }
    }
}

impl Item {
    /// Overwrite the editable fields. `id` and `created_at` are untouched.
    pub fn apply_fields(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, price: f64) -> ItemFields {
        ItemFields {
            name: name.to_string(),
            description: format!("{name} description"),
            price,
        }
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let item = NewItem::new(fields("Pen", 1.5), Utc::now()).into_item(1);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Pen");
        assert_eq!(value["price"], 1.5);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_apply_fields_preserves_identity() {
        let created_at = Utc::now();
        let mut item = NewItem::new(fields("Pen", 1.5), created_at).into_item(4);

        item.apply_fields(fields("Pencil", 0.75));

        assert_eq!(item.id, 4);
        assert_eq!(item.created_at, created_at);
        assert_eq!(item.name, "Pencil");
        assert_eq!(item.description, "Pencil description");
        assert_eq!(item.price, 0.75);
    }

    #[test]
    fn test_payload_ignores_client_id_and_timestamp() {
        let payload: ItemPayload = serde_json::from_value(serde_json::json!({
            "id": 99,
            "name": "Pen",
            "description": "Blue pen",
            "price": 1.5,
            "createdAt": "not even a date"
        }))
        .unwrap();

        assert_eq!(payload.name.as_deref(), Some("Pen"));
        assert_eq!(payload.price, Some(1.5));
    }

    #[test]
    fn test_payload_missing_fields_deserialize_as_none() {
        let payload: ItemPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.name.is_none());
        assert!(payload.description.is_none());
        assert!(payload.price.is_none());
    }
}
