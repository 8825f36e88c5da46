use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, FieldErrors};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Invalid item: {0:?}")]
    Validation(FieldErrors),

    #[error("Item not found with id: {0}")]
    NotFound(i64),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Validation(fields) => AppError::Validation(fields),
            not_found @ ItemError::NotFound(_) => AppError::NotFound(not_found.to_string()),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ItemError::NotFound(999).to_string(),
            "Item not found with id: 999"
        );
    }

    #[test]
    fn test_status_mapping() {
        let not_found: AppError = ItemError::NotFound(1).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid: AppError = ItemError::Validation(FieldErrors::new()).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }
}
