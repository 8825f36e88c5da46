//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorInfo, FieldErrors};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Field validation failed",
    content_type = "application/json",
    example = json!({
        "name": "Item name is required",
        "price": "Price must be positive"
    })
)]
pub struct ValidationErrorResponse(pub FieldErrors);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed body or path",
    content_type = "application/json",
    example = json!({
        "status": "400",
        "message": "Invalid id: abc",
        "date": "Mon Oct 19 10:00:00 UTC 2026"
    })
)]
pub struct BadRequestResponse(pub ErrorInfo);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": "404",
        "message": "Item not found with id: 42",
        "date": "Mon Oct 19 10:00:00 UTC 2026"
    })
)]
pub struct NotFoundResponse(pub ErrorInfo);
