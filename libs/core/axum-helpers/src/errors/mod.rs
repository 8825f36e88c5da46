pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;

/// Layout of [`ErrorInfo::date`], e.g. `Mon Oct 19 10:00:00 UTC 2026`.
pub const ERROR_DATE_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

/// Error body returned for every failure except field validation.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": "404",
///   "message": "Item not found with id: 7",
///   "date": "Mon Oct 19 10:00:00 UTC 2026"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorInfo {
    /// HTTP status code rendered as text
    pub status: String,
    /// Human-readable cause
    pub message: String,
    /// When the failure happened
    pub date: String,
}

impl ErrorInfo {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self::at(status, message, Utc::now())
    }

    pub fn at(status: StatusCode, message: impl Into<String>, when: DateTime<Utc>) -> Self {
        Self {
            status: status.as_u16().to_string(),
            message: message.into(),
            date: when.format(ERROR_DATE_FORMAT).to_string(),
        }
    }
}

/// Field name to violation message. Serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrors(pub BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = FieldErrors::new();
        for (field, message) in iter {
            errors.add(field, message);
        }
        errors
    }
}

/// HTTP-level error. The only place in the workspace that picks status codes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation failed for fields: {0:?}")]
    Validation(FieldErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Not Found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::Validation(_)
            | AppError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::Validation(fields) => {
                let invalid: Vec<&str> = fields.fields().collect();
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    fields = ?invalid,
                    "Validation error"
                );
                return (status, Json(fields)).into_response();
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                e.body_text()
            }
            AppError::InvalidPath(msg) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidPath.code(),
                    "Invalid path parameter: {}",
                    msg
                );
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                msg
            }
        };

        (status, Json(ErrorInfo::new(status, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_error_info_date_format() {
        let when = Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 3).unwrap();
        let info = ErrorInfo::at(StatusCode::NOT_FOUND, "gone", when);

        assert_eq!(info.status, "404");
        assert_eq!(info.message, "gone");
        assert_eq!(info.date, "Mon Oct 19 09:05:03 UTC 2026");
    }

    #[test]
    fn test_field_errors_keeps_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("price", "Item price is required");
        errors.add("price", "Price must be positive");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("price"), Some("Item price is required"));
    }

    #[test]
    fn test_field_errors_serializes_as_flat_object() {
        let errors: FieldErrors = [("name", "Item name is required")].into_iter().collect();
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "Item name is required" }));
    }

    #[tokio::test]
    async fn test_not_found_renders_error_info() {
        let response = AppError::NotFound("Item not found with id: 3".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], "404");
        assert_eq!(body["message"], "Item not found with id: 3");
        assert!(body["date"].as_str().is_some_and(|d| d.contains("UTC")));
    }

    #[tokio::test]
    async fn test_validation_renders_field_map() {
        let errors: FieldErrors = [("description", "Item description is required")]
            .into_iter()
            .collect();
        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({ "description": "Item description is required" })
        );
    }

    #[tokio::test]
    async fn test_invalid_path_renders_error_info() {
        let response = AppError::InvalidPath("Invalid id: abc".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], "400");
        assert_eq!(body["message"], "Invalid id: abc");
    }
}
