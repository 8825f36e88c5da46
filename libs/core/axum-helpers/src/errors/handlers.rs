use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{ErrorCode, ErrorInfo};

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    let body = Json(ErrorInfo::new(
        StatusCode::NOT_FOUND,
        ErrorCode::NotFound.default_message(),
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}
