//! Field rules for incoming item payloads.
//!
//! | Field | Rule | Message |
//! |---|---|---|
//! | name | present, non-blank | `Item name is required` |
//! | description | present, non-blank | `Item description is required` |
//! | price | present | `Item price is required` |
//! | price | strictly positive | `Price must be positive` |
//!
//! Every rule runs; the result carries at most one message per field.

use axum_helpers::FieldErrors;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{ItemFields, ItemPayload};

/// Rejects strings that are empty or whitespace only.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Runs every rule and returns the violations. Empty means acceptable.
pub fn field_errors(payload: &ItemPayload) -> FieldErrors {
    match payload.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => to_field_errors(&errors),
    }
}

/// Validates `payload` and, when it passes, hands back the checked fields.
pub fn validate_item(payload: ItemPayload) -> Result<ItemFields, FieldErrors> {
    let errors = field_errors(&payload);
    if !errors.is_empty() {
        return Err(errors);
    }

    match (payload.name, payload.description, payload.price) {
        (Some(name), Some(description), Some(price)) => Ok(ItemFields {
            name,
            description,
            price,
        }),
        // `required` rules above make this unreachable for a passing payload.
        _ => Err(errors),
    }
}

fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, violations) in errors.field_errors() {
        if let Some(first) = violations.first() {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            fields.add(field.to_string(), message);
        }
    }
    fields
}
