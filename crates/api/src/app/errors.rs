use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use restock_core::EngineError;

pub fn engine_error_to_response(err: EngineError) -> axum::response::Response {
    match err {
        EngineError::InvalidParameter(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_parameter", msg)
        }
        EngineError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", msg),
        EngineError::InsufficientStock {
            available,
            requested,
        } => json_error(
            StatusCode::CONFLICT,
            "insufficient_stock",
            format!("{available} available, {requested} requested"),
        ),
        EngineError::Persistence(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "persistence_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
